use super::*;

// --- events ---

#[test]
fn pointer_event_at_has_no_button() {
    let e = PointerEvent::at(3.0, 4.0);
    assert_eq!(e.button, 0);
}

#[test]
fn key_event_keeps_code() {
    let e = KeyEvent::new("KeyQ");
    assert_eq!(e.code, "KeyQ");
}

#[test]
fn disposition_is_suppressed() {
    assert!(Disposition::Suppressed.is_suppressed());
    assert!(!Disposition::Forwarded.is_suppressed());
}

// --- default gate ---

#[test]
fn default_gate_forwards_everything() {
    let mut gate = InputGate::new();
    assert_eq!(gate.pass_movement(), Disposition::Forwarded);
    assert_eq!(gate.pass_buttons(), Disposition::Forwarded);
    assert_eq!(gate.pass_keys(), Disposition::Forwarded);
}

// --- persistent flags ---

#[test]
fn persistent_flag_suppresses_until_cleared() {
    let mut gate = InputGate::new();
    gate.movement.persistent = true;
    assert_eq!(gate.pass_movement(), Disposition::Suppressed);
    assert_eq!(gate.pass_movement(), Disposition::Suppressed);
    gate.movement.persistent = false;
    assert_eq!(gate.pass_movement(), Disposition::Forwarded);
}

#[test]
fn channels_are_independent() {
    let mut gate = InputGate::new();
    gate.keys.persistent = true;
    assert_eq!(gate.pass_movement(), Disposition::Forwarded);
    assert_eq!(gate.pass_buttons(), Disposition::Forwarded);
    assert_eq!(gate.pass_keys(), Disposition::Suppressed);
}

// --- one-shot flags ---

#[test]
fn one_shot_suppresses_exactly_one_event() {
    let mut gate = InputGate::new();
    gate.movement.once = true;
    assert_eq!(gate.pass_movement(), Disposition::Suppressed);
    assert_eq!(gate.pass_movement(), Disposition::Forwarded);
}

#[test]
fn one_shot_does_not_leak_across_channels() {
    let mut gate = InputGate::new();
    gate.buttons.once = true;
    assert_eq!(gate.pass_movement(), Disposition::Forwarded);
    assert_eq!(gate.pass_buttons(), Disposition::Suppressed);
    assert_eq!(gate.pass_buttons(), Disposition::Forwarded);
}

#[test]
fn one_shot_consumed_even_while_persistent_set() {
    let mut gate = InputGate::new();
    gate.keys.persistent = true;
    gate.keys.once = true;
    assert_eq!(gate.pass_keys(), Disposition::Suppressed);
    // The one-shot was consumed by the suppression above.
    assert!(!gate.keys.once);
    assert_eq!(gate.pass_keys(), Disposition::Suppressed);
}
