use ink_core::{validate_chain, PlanError, StagePass};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    A,
    B,
    Screen,
}

fn pass(name: &'static str, reads: Option<Target>, writes: Target) -> StagePass<Target> {
    StagePass { name, reads, writes }
}

#[test]
fn linear_chain_validates() {
    let stages = [
        pass("draw", None, Target::A),
        pass("ascii", Some(Target::A), Target::B),
        pass("post", Some(Target::B), Target::Screen),
    ];
    assert_eq!(validate_chain(&stages), Ok(()));
}

#[test]
fn reading_an_unwritten_target_is_rejected() {
    let stages = [
        pass("draw", None, Target::A),
        pass("post", Some(Target::B), Target::Screen),
    ];
    assert_eq!(
        validate_chain(&stages),
        Err(PlanError::ReadBeforeWrite { stage: "post" })
    );
}

#[test]
fn reading_a_later_write_is_rejected() {
    // Order matters: a stage cannot sample a target produced downstream.
    let stages = [
        pass("ascii", Some(Target::A), Target::B),
        pass("draw", None, Target::A),
    ];
    assert_eq!(
        validate_chain(&stages),
        Err(PlanError::ReadBeforeWrite { stage: "ascii" })
    );
}

#[test]
fn double_writes_are_rejected() {
    let stages = [
        pass("draw", None, Target::A),
        pass("again", None, Target::A),
    ];
    assert_eq!(
        validate_chain(&stages),
        Err(PlanError::DuplicateWrite { stage: "again" })
    );
}

#[test]
fn feedback_loops_are_rejected() {
    let stages = [
        pass("draw", None, Target::A),
        pass("echo", Some(Target::B), Target::B),
    ];
    assert_eq!(
        validate_chain(&stages),
        Err(PlanError::SelfDependency { stage: "echo" })
    );
}

#[test]
fn empty_chain_is_rejected() {
    assert_eq!(validate_chain::<Target>(&[]), Err(PlanError::Empty));
}
