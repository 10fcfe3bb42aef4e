//! Tests for the shared vocabulary: serde shapes, validation, and views.

use crate::commands::ControlCommand;
use crate::components::{AgentActivity, AgentState, DebrisState};
use crate::config::SimConfig;
use crate::enums::*;
use crate::error::{ConfigError, ScenarioError};
use crate::events::SimEvent;
use crate::scenario::Scenario;
use crate::state::{Entity, EntityBody, EntitySet, SimSnapshot};
use crate::types::{EntityId, OrbitalElements, Position, SimTime};

fn orbit(altitude: f64) -> OrbitalElements {
    OrbitalElements {
        altitude,
        inclination: 51.6,
        raan: 0.0,
        phase: 0.0,
        speed: 0.0011,
    }
}

fn minimal_scenario() -> Vec<Entity> {
    vec![
        Entity::asset("ISS-ALPHA", orbit(420.0)),
        Entity::agent("SWARM-01", orbit(500.0), AgentState::idle(100.0)),
        Entity::debris("DEB-1001", orbit(415.0), DebrisState::Safe),
    ]
}

// ---- Serde shapes ----

#[test]
fn test_scenario_json_hand_written() {
    let json = r#"{
        "entities": [
            { "id": "ISS-ALPHA",
              "orbit": { "altitude": 420, "inclination": 51.6, "raan": 0, "phase": 0, "speed": 0.0011 },
              "body": { "kind": "Asset" } },
            { "id": "SWARM-01",
              "orbit": { "altitude": 500, "inclination": 51.6, "raan": 10, "phase": 0, "speed": 0.00105 },
              "body": { "kind": "Agent", "state": { "power": 100, "activity": { "mode": "Idle" } } } },
            { "id": "DEB-1001",
              "orbit": { "altitude": 418, "inclination": 50.0, "raan": 5, "phase": 90, "speed": 0.001 },
              "body": { "kind": "Debris", "state": { "status": "Threat" } } }
        ]
    }"#;

    let scenario = Scenario::from_json_str(json).unwrap();
    assert_eq!(scenario.entities.len(), 3);
    assert_eq!(scenario.entities[0].kind(), EntityKind::Asset);
    assert_eq!(
        scenario.entities[1].agent_state().unwrap().status(),
        AgentStatus::Idle
    );
    // Claim and progress default when omitted.
    assert_eq!(
        scenario.entities[2].debris_state().unwrap(),
        &DebrisState::new_threat()
    );
    // Position is derived and may be omitted.
    assert_eq!(scenario.entities[2].position, Position::default());
    scenario.validate().unwrap();
}

#[test]
fn test_tracking_agent_serde_shape() {
    let state = AgentState {
        power: 42.0,
        activity: AgentActivity::Tracking {
            target: EntityId::new("DEB-7"),
        },
    };
    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(value["activity"]["mode"], "Tracking");
    assert_eq!(value["activity"]["target"], "DEB-7");
}

#[test]
fn test_entity_set_serializes_as_list_and_reindexes() {
    let set = EntitySet::from_entities(minimal_scenario());
    let json = serde_json::to_string(&set).unwrap();
    assert!(json.starts_with('['), "EntitySet should serialize as a list");

    let back: EntitySet = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), 3);
    let agent = back.get(&EntityId::new("SWARM-01")).unwrap();
    assert_eq!(agent.kind(), EntityKind::Agent);
    assert!(back.get(&EntityId::new("NOPE")).is_none());
}

#[test]
fn test_control_command_serde() {
    let cmd: ControlCommand =
        serde_json::from_str(r#"{ "type": "SetSpeed", "multiplier": 50.0 }"#).unwrap();
    assert_eq!(cmd, ControlCommand::SetSpeed { multiplier: 50.0 });
    let toggle: ControlCommand = serde_json::from_str(r#"{ "type": "TogglePlay" }"#).unwrap();
    assert_eq!(toggle, ControlCommand::TogglePlay);
}

#[test]
fn test_snapshot_serde() {
    let snapshot = SimSnapshot {
        entities: EntitySet::from_entities(minimal_scenario()),
        ..Default::default()
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: SimSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.entities, snapshot.entities);
    assert_eq!(back.time, SimTime::default());
}

// ---- Events ----

#[test]
fn test_event_log_lines() {
    let locked = SimEvent::ThreatLocked {
        debris: "DEB-1001".into(),
        agent: "SWARM-01".into(),
        distance_km: 120.0,
    };
    assert_eq!(locked.to_string(), "[ALERT] DEB-1001 locked by SWARM-01");
    assert_eq!(locked.level(), AlertLevel::Warning);

    let depleted = SimEvent::BatteryDepleted {
        agent: "SWARM-02".into(),
        released: "DEB-1001".into(),
    };
    assert_eq!(
        depleted.to_string(),
        "[WARN] SWARM-02 battery depleted. Recharging."
    );

    let recharged = SimEvent::Recharged {
        agent: "SWARM-02".into(),
    };
    assert_eq!(recharged.to_string(), "[SYSTEM] SWARM-02 fully charged. Online.");
    assert_eq!(recharged.level(), AlertLevel::Info);

    let done = SimEvent::TargetNeutralized {
        debris: "DEB-1001".into(),
        agent: "SWARM-01".into(),
    };
    assert_eq!(done.to_string(), "[SUCCESS] DEB-1001 neutralized.");

    let detected = SimEvent::ThreatDetected {
        debris: "DEB-1001".into(),
        distance_km: 1499.6,
    };
    assert!(detected.to_string().contains("1500 km"));
    assert!(detected.level() > AlertLevel::Warning);
}

// ---- Config ----

#[test]
fn test_default_config_is_valid() {
    let config = SimConfig::default();
    config.validate().unwrap();
    assert_eq!(config.idle_recharge_rate, config.recharge_rate * 0.5);
    assert_eq!(config.rate_scale(20.0), 1.0);
}

#[test]
fn test_partial_config_json_uses_defaults() {
    let config: SimConfig = serde_json::from_str(r#"{ "threat_range_km": 800 }"#).unwrap();
    config.validate().unwrap();
    assert_eq!(config.threat_range_km, 800.0);
    assert_eq!(config.drain_rate, SimConfig::default().drain_rate);
}

#[test]
fn test_config_rejects_bad_values() {
    let config = SimConfig {
        drain_rate: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Negative {
            field: "drain_rate",
            ..
        })
    ));

    let config = SimConfig {
        scene_scale: 0.0,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::NotPositive { .. })));

    let config = SimConfig {
        neutralization_rate: f64::NAN,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::NotFinite { .. })));

    let config = SimConfig {
        min_engagement_power: 100.0,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::OutOfRange { .. })));
}

// ---- Scenario validation ----

#[test]
fn test_valid_scenario_builds_entity_set() {
    let set = Scenario::new(minimal_scenario()).into_entity_set().unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.asset().unwrap().id, EntityId::new("ISS-ALPHA"));
}

#[test]
fn test_rejects_duplicate_ids() {
    let mut entities = minimal_scenario();
    entities.push(Entity::debris("DEB-1001", orbit(600.0), DebrisState::Safe));
    let err = Scenario::new(entities).validate().unwrap_err();
    assert!(matches!(err, ScenarioError::DuplicateId(id) if id.as_str() == "DEB-1001"));
}

#[test]
fn test_rejects_missing_or_extra_asset() {
    let mut entities = minimal_scenario();
    entities.remove(0);
    assert!(matches!(
        Scenario::new(entities).validate(),
        Err(ScenarioError::AssetCount(0))
    ));

    let mut entities = minimal_scenario();
    entities.push(Entity::asset("ISS-BETA", orbit(430.0)));
    assert!(matches!(
        Scenario::new(entities).validate(),
        Err(ScenarioError::AssetCount(2))
    ));
}

#[test]
fn test_rejects_malformed_orbits() {
    let mut entities = minimal_scenario();
    entities[2].orbit.altitude = -5.0;
    assert!(matches!(
        Scenario::new(entities).validate(),
        Err(ScenarioError::NegativeAltitude { .. })
    ));

    let mut entities = minimal_scenario();
    entities[1].orbit.speed = f64::INFINITY;
    assert!(matches!(
        Scenario::new(entities).validate(),
        Err(ScenarioError::NonFiniteOrbit { .. })
    ));
}

#[test]
fn test_rejects_power_out_of_range() {
    let mut entities = minimal_scenario();
    entities[1].body = EntityBody::Agent {
        state: AgentState::idle(120.0),
    };
    assert!(matches!(
        Scenario::new(entities).validate(),
        Err(ScenarioError::PowerOutOfRange { .. })
    ));
}

#[test]
fn test_rejects_one_sided_claims() {
    // Agent tracks a debris that does not name it.
    let mut entities = minimal_scenario();
    entities[1].body = EntityBody::Agent {
        state: AgentState {
            power: 80.0,
            activity: AgentActivity::Tracking {
                target: "DEB-1001".into(),
            },
        },
    };
    entities[2].body = EntityBody::Debris {
        state: DebrisState::new_threat(),
    };
    assert!(matches!(
        Scenario::new(entities).validate(),
        Err(ScenarioError::ClaimMismatch { .. })
    ));

    // Debris names an agent that is idle.
    let mut entities = minimal_scenario();
    entities[2].body = EntityBody::Debris {
        state: DebrisState::Threat {
            claimed_by: Some("SWARM-01".into()),
            progress: 10.0,
        },
    };
    assert!(matches!(
        Scenario::new(entities).validate(),
        Err(ScenarioError::ClaimMismatch { .. })
    ));

    // Agent tracks the asset.
    let mut entities = minimal_scenario();
    entities[1].body = EntityBody::Agent {
        state: AgentState {
            power: 80.0,
            activity: AgentActivity::Tracking {
                target: "ISS-ALPHA".into(),
            },
        },
    };
    assert!(matches!(
        Scenario::new(entities).validate(),
        Err(ScenarioError::TargetNotDebris { .. })
    ));
}

#[test]
fn test_accepts_mutual_claim() {
    let mut entities = minimal_scenario();
    entities[1].body = EntityBody::Agent {
        state: AgentState {
            power: 80.0,
            activity: AgentActivity::Tracking {
                target: "DEB-1001".into(),
            },
        },
    };
    entities[2].body = EntityBody::Debris {
        state: DebrisState::Threat {
            claimed_by: Some("SWARM-01".into()),
            progress: 25.0,
        },
    };
    Scenario::new(entities).validate().unwrap();
}

// ---- Views ----

#[test]
fn test_stats_and_links() {
    let mut entities = minimal_scenario();
    entities[1].body = EntityBody::Agent {
        state: AgentState {
            power: 60.0,
            activity: AgentActivity::Tracking {
                target: "DEB-1001".into(),
            },
        },
    };
    entities[2].body = EntityBody::Debris {
        state: DebrisState::Threat {
            claimed_by: Some("SWARM-01".into()),
            progress: 0.0,
        },
    };
    entities.push(Entity::agent(
        "SWARM-02",
        orbit(500.0),
        AgentState {
            power: 20.0,
            activity: AgentActivity::Recharging,
        },
    ));
    entities.push(Entity::debris("DEB-2002", orbit(600.0), DebrisState::Neutralized));

    let set = EntitySet::from_entities(entities);
    let stats = set.stats();
    assert_eq!(stats.threats_active, 1);
    assert_eq!(stats.neutralized, 1);
    assert_eq!(stats.debris_safe, 0);
    assert_eq!(stats.agents_tracking, 1);
    assert_eq!(stats.agents_recharging, 1);
    assert_eq!(stats.agents_idle, 0);
    assert!((stats.mean_agent_power - 40.0).abs() < 1e-12);

    let links = set.tracking_links();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].agent.as_str(), "SWARM-01");
    assert_eq!(links[0].target.as_str(), "DEB-1001");
}

#[test]
fn test_position_range() {
    let a = Position::new(0.0, 0.0, 0.0);
    let b = Position::new(3.0, 4.0, 0.0);
    assert!((a.range_to(&b) - 5.0).abs() < 1e-12);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    time.advance(2.5);
    time.advance(2.5);
    assert_eq!(time.tick, 2);
    assert!((time.elapsed_secs - 5.0).abs() < 1e-12);
}
