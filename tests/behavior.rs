use pretty_assertions::assert_eq;
use skylark::fsm::{DelegateState, State, StateId, StateMachine, StateMeta};

const CRUISE: StateId = StateId(0);
const CLIMB: StateId = StateId(1);
const STALL: StateId = StateId(2);

#[derive(Debug, Default)]
struct FlightCtx {
    airspeed: f64,
    stall_speed: f64,
    target_speed: f64,
    alarms: Vec<String>,
}

/// Stall recovery written as a concrete `State` impl rather than
/// delegates
struct StallRecovery {
    meta: StateMeta,
}

impl StallRecovery {
    fn new() -> Self {
        Self {
            meta: StateMeta::new(STALL, "stall", vec![CRUISE, CLIMB], 5),
        }
    }
}

impl State<FlightCtx> for StallRecovery {
    fn meta(&self) -> &StateMeta {
        &self.meta
    }

    fn condition(&self, ctx: &FlightCtx) -> bool {
        ctx.airspeed < ctx.stall_speed
    }

    fn on_enter(&mut self, ctx: &mut FlightCtx) {
        ctx.alarms.push("stall".to_string());
    }

    fn fixed_update(&mut self, ctx: &mut FlightCtx) {
        // Recover by diving for speed.
        ctx.airspeed += 20.0;
    }
}

fn autopilot(ctx: &mut FlightCtx) -> StateMachine<FlightCtx> {
    let mut machine = StateMachine::new();
    machine
        .set_idle_state(
            DelegateState::new(
                StateMeta::new(CRUISE, "cruise", vec![CLIMB, STALL], 0),
                |ctx: &FlightCtx| ctx.airspeed >= ctx.stall_speed,
            ),
            ctx,
        )
        .unwrap();
    machine
        .add_state(
            DelegateState::new(
                StateMeta::new(CLIMB, "climb", vec![CRUISE, STALL], 1),
                |ctx: &FlightCtx| ctx.airspeed < ctx.target_speed,
            )
            .with_action(|ctx: &mut FlightCtx| ctx.airspeed += 10.0),
        )
        .unwrap();
    machine.add_state(StallRecovery::new()).unwrap();
    machine
}

#[test]
fn test_autopilot_climbs_until_target_speed() {
    let mut ctx = FlightCtx {
        airspeed: 100.0,
        stall_speed: 50.0,
        target_speed: 120.0,
        ..Default::default()
    };
    let mut machine = autopilot(&mut ctx);

    // Cruise holds, but climb wants control and outranks it.
    assert_eq!(machine.update(&mut ctx).unwrap(), CLIMB);
    machine.perform_action(&mut ctx).unwrap();
    assert_eq!(ctx.airspeed, 110.0);

    assert_eq!(machine.update(&mut ctx).unwrap(), CLIMB);
    machine.perform_action(&mut ctx).unwrap();
    assert_eq!(ctx.airspeed, 120.0);

    // Target reached: climb's condition lapses and cruise takes over.
    assert_eq!(machine.update(&mut ctx).unwrap(), CRUISE);
    assert_eq!(machine.current_name(), Some("cruise"));
}

#[test]
fn test_stall_outranks_everything_and_recovers() {
    let mut ctx = FlightCtx {
        airspeed: 100.0,
        stall_speed: 50.0,
        target_speed: 120.0,
        ..Default::default()
    };
    let mut machine = autopilot(&mut ctx);

    ctx.airspeed = 30.0;
    // Both climb (airspeed below target) and stall recovery qualify;
    // stall recovery has the higher priority.
    assert_eq!(machine.update(&mut ctx).unwrap(), STALL);
    assert_eq!(ctx.alarms, vec!["stall".to_string()]);

    machine.perform_action(&mut ctx).unwrap();
    assert_eq!(ctx.airspeed, 50.0);

    // Speed recovered: the stall condition lapses; climb still wants
    // more speed.
    assert_eq!(machine.update(&mut ctx).unwrap(), CLIMB);
}

#[test]
fn test_time_in_state_and_snapshot() {
    let mut ctx = FlightCtx {
        airspeed: 100.0,
        stall_speed: 50.0,
        target_speed: 90.0,
        ..Default::default()
    };
    let mut machine = autopilot(&mut ctx);

    machine.perform_action(&mut ctx).unwrap();
    machine.perform_action(&mut ctx).unwrap();
    assert_eq!(machine.time_in_state(), 2);

    let snapshot = machine.snapshot();
    assert_eq!(snapshot.current, Some(CRUISE));
    assert_eq!(snapshot.current_name.as_deref(), Some("cruise"));
    assert_eq!(snapshot.tick, 2);

    let json = machine.snapshot_json().unwrap();
    assert!(json.contains("\"cruise\""));
}

#[test]
fn test_locked_autopilot_ignores_stall() {
    let mut ctx = FlightCtx {
        airspeed: 30.0,
        stall_speed: 50.0,
        target_speed: 120.0,
        ..Default::default()
    };
    let mut machine = autopilot(&mut ctx);

    machine.lock_transitions(true);
    assert_eq!(machine.update(&mut ctx).unwrap(), CRUISE);
    assert!(ctx.alarms.is_empty());

    machine.lock_transitions(false);
    assert_eq!(machine.update(&mut ctx).unwrap(), STALL);
}
