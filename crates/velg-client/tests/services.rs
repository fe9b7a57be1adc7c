//! Integration tests for the resource services: paths, verbs, bodies and
//! public/authenticated routing.

#![allow(clippy::unwrap_used)]

mod common;

use axum::http::Method;
use serde_json::{Value, json};
use velg_client::{AgentAssignment, ApiClient, ProfessionRequirementInput};
use velg_schemas::{
    BuildingCreate, BuildingUpdate, EchoTrigger, Filter, MemberAdd, MemberRoleChange, Pagination,
    Schema, SettingUpsert, SimulationCreate, SimulationUpdate,
};
use velg_types::{
    AgentId, BuildingId, EchoId, EchoStatus, EventId, MemberId, SettingCategory, SimulationId,
    SimulationRole, User, UserId,
};

use common::{MockApi, echo_json, ok, simulation_json};

const SIM: &str = "0195a1f0-0000-7000-8000-00000000000a";

fn sim_id() -> SimulationId {
    SimulationId::from(uuid::Uuid::parse_str(SIM).unwrap())
}

fn sign_in(client: &ApiClient) {
    client.state().set_user(Some(User {
        id: UserId::new(),
        email: None,
    }));
    client.state().set_access_token(Some(String::from("jwt")));
}

#[tokio::test]
async fn simulation_list_is_public_for_visitors_and_keeps_order() {
    let mock = MockApi::start().await;
    let page = json!({
        "success": true,
        "data": [
            simulation_json("0195a1f0-0000-7000-8000-0000000000b2", "Station Null"),
            simulation_json("0195a1f0-0000-7000-8000-0000000000b1", "Velgarien"),
        ],
        "meta": {"count": 2, "total": 2, "limit": 25, "offset": 0}
    });
    mock.reply(&Method::GET, "/api/v1/public/simulations", 200, &page);
    let client = mock.client();

    let result = client
        .simulations()
        .list(Pagination::default(), &Filter::default())
        .await
        .unwrap();

    let names: Vec<&str> = result.data.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Station Null", "Velgarien"]);
    assert!(!result.has_more());
    assert_eq!(mock.last().query.as_deref(), Some("limit=25&offset=0"));
}

#[tokio::test]
async fn simulation_crud_paths() {
    let mock = MockApi::start().await;
    let path = format!("/api/v1/simulations/{SIM}");
    let sim = ok(simulation_json(SIM, "Velgarien"));
    mock.reply(&Method::GET, &path, 200, &sim);
    mock.reply(&Method::POST, "/api/v1/simulations", 201, &sim);
    mock.reply(&Method::PUT, &path, 200, &sim);
    mock.reply(&Method::DELETE, &path, 200, &sim);
    let client = mock.client();
    sign_in(&client);
    let api = client.simulations();

    assert_eq!(api.get_by_id(sim_id()).await.unwrap().name, "Velgarien");
    assert_eq!(mock.last().path, path);

    let create = SimulationCreate::parse(json!({"name": "Velgarien"})).unwrap();
    api.create(&create).await.unwrap();
    let body = mock.last().body.unwrap();
    assert_eq!(body["name"], "Velgarien");
    assert_eq!(body["content_locale"], "en");

    let update = SimulationUpdate::parse(json!({"description": "Grey towers"})).unwrap();
    api.update(sim_id(), &update).await.unwrap();
    assert_eq!(mock.last().method, Method::PUT);

    api.remove(sim_id()).await.unwrap();
    assert_eq!(mock.last().method, Method::DELETE);
}

#[tokio::test]
async fn member_workflow() {
    let mock = MockApi::start().await;
    let member_id = MemberId::new();
    let member = json!({
        "id": member_id,
        "simulation_id": SIM,
        "user_id": "0195a1f0-0000-7000-8000-0000000000c1",
        "member_role": "editor",
        "joined_at": null
    });
    let members = format!("/api/v1/simulations/{SIM}/members");
    let one = format!("{members}/{member_id}");
    mock.reply(&Method::GET, &members, 200, &ok(json!([member])));
    mock.reply(&Method::POST, &members, 201, &ok(member.clone()));
    mock.reply(&Method::PUT, &one, 200, &ok(member));
    mock.reply(&Method::DELETE, &one, 200, &ok(Value::Null));
    let client = mock.client();
    sign_in(&client);
    let api = client.members();

    assert_eq!(api.list(sim_id()).await.unwrap().len(), 1);

    let add = MemberAdd {
        user_id: UserId::new(),
        member_role: SimulationRole::Editor,
    };
    api.add(sim_id(), &add).await.unwrap();
    assert_eq!(mock.last().body.unwrap()["member_role"], "editor");

    let change = MemberRoleChange {
        member_role: SimulationRole::Admin,
    };
    api.change_role(sim_id(), member_id, &change).await.unwrap();
    let req = mock.last();
    assert_eq!(req.path, one);
    assert_eq!(req.body, Some(json!({"member_role": "admin"})));

    api.remove(sim_id(), member_id).await.unwrap();
    assert_eq!(mock.last().method, Method::DELETE);
}

#[tokio::test]
async fn settings_by_category_and_upsert() {
    let mock = MockApi::start().await;
    let path = format!("/api/v1/simulations/{SIM}/settings");
    mock.reply(&Method::GET, &path, 200, &ok(json!([])));
    mock.reply(
        &Method::POST,
        &path,
        200,
        &ok(json!({
            "id": "0195a1f0-0000-7000-8000-0000000000d1",
            "simulation_id": SIM,
            "category": "design",
            "setting_key": "color_primary",
            "setting_value": "#0d7377",
            "updated_by_id": null,
            "created_at": "2026-02-16T09:05:00Z",
            "updated_at": "2026-02-16T09:05:00Z"
        })),
    );
    let client = mock.client();
    sign_in(&client);
    let api = client.settings();

    api.get_by_category(sim_id(), SettingCategory::Design)
        .await
        .unwrap();
    assert_eq!(mock.last().query.as_deref(), Some("category=design"));

    api.list(sim_id(), None).await.unwrap();
    assert!(mock.last().query.is_none());

    let upsert = SettingUpsert::parse(json!({
        "category": "design",
        "setting_key": "color_primary",
        "setting_value": "#0d7377"
    }))
    .unwrap();
    let saved = api.upsert(sim_id(), &upsert).await.unwrap();
    assert_eq!(saved.setting_value, json!("#0d7377"));
}

#[tokio::test]
async fn echo_approval_round_trip() {
    let mock = MockApi::start().await;
    let echo_id = EchoId::new();
    let base = format!("/api/v1/simulations/{SIM}/echoes");
    mock.reply(&Method::POST, &base, 201, &ok(echo_json(&echo_id.to_string(), "pending")));
    mock.reply(
        &Method::PATCH,
        &format!("{base}/{echo_id}/approve"),
        200,
        &ok(echo_json(&echo_id.to_string(), "approved")),
    );
    mock.reply(
        &Method::PATCH,
        &format!("{base}/{echo_id}/reject"),
        200,
        &ok(echo_json(&echo_id.to_string(), "rejected")),
    );
    let client = mock.client();
    sign_in(&client);
    let api = client.echoes();

    let trigger = EchoTrigger::parse(json!({
        "source_event_id": EventId::new(),
        "target_simulation_id": SimulationId::new(),
        "echo_vector": "dream"
    }))
    .unwrap();
    let echo = api.trigger_echo(sim_id(), &trigger).await.unwrap();
    assert_eq!(echo.status, EchoStatus::Pending);
    assert_eq!(mock.last().body.unwrap()["echo_strength"], json!(1.0));

    let approved = api.approve(sim_id(), echo_id).await.unwrap();
    assert_eq!(approved.status, EchoStatus::Approved);
    assert_eq!(mock.last().method, Method::PATCH);

    let rejected = api.reject(sim_id(), echo_id).await.unwrap();
    assert_eq!(rejected.status, EchoStatus::Rejected);
}

#[tokio::test]
async fn event_echoes_are_public_for_visitors() {
    let mock = MockApi::start().await;
    let event_id = EventId::new();
    let path = format!("/api/v1/public/simulations/{SIM}/events/{event_id}/echoes");
    mock.reply(&Method::GET, &path, 200, &ok(json!([])));
    let client = mock.client();

    let echoes = client
        .echoes()
        .list_for_event(sim_id(), event_id)
        .await
        .unwrap();

    assert!(echoes.is_empty());
    assert!(mock.last().authorization.is_none());
}

#[tokio::test]
async fn map_data_is_always_public() {
    let mock = MockApi::start().await;
    mock.reply(
        &Method::GET,
        "/api/v1/public/map-data",
        200,
        &ok(json!({"simulations": [], "connections": [], "echo_counts": {"x": 3}})),
    );
    let client = mock.client();
    sign_in(&client);

    let data = client.connections().map_data().await.unwrap();

    assert_eq!(data.echo_counts.get("x"), Some(&3));
    assert!(mock.last().authorization.is_none());
}

#[tokio::test]
async fn building_agent_assignment() {
    let mock = MockApi::start().await;
    let building_id = BuildingId::new();
    let agent_id = AgentId::new();
    let agents = format!("/api/v1/simulations/{SIM}/buildings/{building_id}/agents");
    mock.reply(
        &Method::POST,
        &agents,
        201,
        &ok(json!({
            "id": "0195a1f0-0000-7000-8000-0000000000e1",
            "building_id": building_id,
            "agent_id": agent_id,
            "relation_type": "works"
        })),
    );
    mock.reply(&Method::DELETE, &format!("{agents}/{agent_id}"), 204, &Value::Null);
    let client = mock.client();
    sign_in(&client);
    let api = client.buildings();

    let assignment = AgentAssignment {
        agent_id,
        relation_type: Some(String::from("works")),
    };
    let relation = api
        .assign_agent(sim_id(), building_id, &assignment)
        .await
        .unwrap();
    assert_eq!(relation.relation_type, "works");

    api.unassign_agent(sim_id(), building_id, agent_id)
        .await
        .unwrap();
    assert_eq!(mock.last().path, format!("{agents}/{agent_id}"));
}

fn building_json(id: BuildingId, condition: &str) -> Value {
    json!({
        "id": id,
        "simulation_id": SIM,
        "name": "Ministry of Rain",
        "building_type": "government",
        "population_capacity": 40,
        "building_condition": condition,
        "created_at": "2026-02-16T09:05:00Z",
        "updated_at": "2026-02-16T09:05:00Z"
    })
}

#[tokio::test]
async fn building_crud_paths_and_bodies() {
    let mock = MockApi::start().await;
    let building_id = BuildingId::new();
    let buildings = format!("/api/v1/simulations/{SIM}/buildings");
    let one = format!("{buildings}/{building_id}");
    mock.reply(
        &Method::GET,
        &buildings,
        200,
        &json!({
            "success": true,
            "data": [building_json(building_id, "good")],
            "meta": {"count": 1, "total": 12, "limit": 5, "offset": 5}
        }),
    );
    mock.reply(&Method::GET, &one, 200, &ok(building_json(building_id, "good")));
    mock.reply(&Method::POST, &buildings, 201, &ok(building_json(building_id, "good")));
    mock.reply(&Method::PUT, &one, 200, &ok(building_json(building_id, "ruined")));
    mock.reply(&Method::DELETE, &one, 200, &ok(building_json(building_id, "ruined")));
    let client = mock.client();
    sign_in(&client);
    let api = client.buildings();

    let filter = Filter {
        search: Some(String::from("ministry")),
        filters: Some(
            [(String::from("building_type"), String::from("government"))]
                .into_iter()
                .collect(),
        ),
    };
    let listed = api
        .list(sim_id(), Pagination::new(5, 5).unwrap(), &filter)
        .await
        .unwrap();
    assert!(listed.has_more());
    let req = mock.last();
    assert_eq!((req.method, req.path), (Method::GET, buildings.clone()));
    assert_eq!(
        req.query.as_deref(),
        Some("limit=5&offset=5&search=ministry&building_type=government")
    );

    let building = api.get_by_id(sim_id(), building_id).await.unwrap();
    assert_eq!(building.population_capacity, 40);
    let req = mock.last();
    assert_eq!((req.method, req.path), (Method::GET, one.clone()));

    let create = BuildingCreate::parse(json!({
        "name": "Ministry of Rain",
        "building_type": "government",
        "population_capacity": 40
    }))
    .unwrap();
    api.create(sim_id(), &create).await.unwrap();
    let req = mock.last();
    assert_eq!((req.method, req.path), (Method::POST, buildings));
    assert_eq!(
        req.body,
        Some(json!({
            "name": "Ministry of Rain",
            "building_type": "government",
            "population_capacity": 40,
            "data_source": "manual"
        }))
    );

    let update = BuildingUpdate {
        building_condition: Some(String::from("ruined")),
        ..BuildingUpdate::default()
    };
    let updated = api.update(sim_id(), building_id, &update).await.unwrap();
    assert_eq!(updated.building_condition.as_deref(), Some("ruined"));
    let req = mock.last();
    assert_eq!((req.method, req.path), (Method::PUT, one.clone()));
    assert_eq!(req.body, Some(json!({"building_condition": "ruined"})));

    let removed = api.remove(sim_id(), building_id).await.unwrap();
    assert_eq!(removed.id, building_id);
    let req = mock.last();
    assert_eq!((req.method, req.path), (Method::DELETE, one));
    assert!(req.body.is_none());
}

#[tokio::test]
async fn building_profession_requirements() {
    let mock = MockApi::start().await;
    let building_id = BuildingId::new();
    let path = format!("/api/v1/simulations/{SIM}/buildings/{building_id}/profession-requirements");
    let requirement = json!({
        "id": "0195a1f0-0000-7000-8000-0000000000f1",
        "building_id": building_id,
        "profession": "archivist",
        "min_qualification_level": 3,
        "is_mandatory": true
    });
    mock.reply(&Method::GET, &path, 200, &ok(json!([requirement])));
    mock.reply(&Method::POST, &path, 201, &ok(requirement));
    let client = mock.client();
    sign_in(&client);
    let api = client.buildings();

    let listed = api
        .profession_requirements(sim_id(), building_id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    let req = mock.last();
    assert_eq!((req.method, req.path), (Method::GET, path.clone()));
    assert!(req.query.is_none());

    let input = ProfessionRequirementInput {
        profession: String::from("archivist"),
        min_qualification_level: 3,
        is_mandatory: true,
    };
    let saved = api
        .set_profession_requirement(sim_id(), building_id, &input)
        .await
        .unwrap();
    assert!(saved.is_mandatory);
    let req = mock.last();
    assert_eq!((req.method, req.path), (Method::POST, path));
    assert_eq!(
        req.body,
        Some(json!({
            "profession": "archivist",
            "min_qualification_level": 3,
            "is_mandatory": true
        }))
    );
}

#[tokio::test]
async fn errors_pass_through_services_unchanged() {
    let mock = MockApi::start().await;
    mock.reply(
        &Method::GET,
        &format!("/api/v1/simulations/{SIM}/members"),
        403,
        &json!({"message": "Admins only"}),
    );
    let client = mock.client();
    sign_in(&client);

    let err = client.members().list(sim_id()).await.unwrap_err();

    assert_eq!(err.code, "HTTP_403");
    assert_eq!(err.message, "Admins only");
}
