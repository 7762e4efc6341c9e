use thiserror::Error;

/// One render stage in the fixed pipeline chain: the target it samples, if
/// any, and the target it writes. Execution order is the list order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StagePass<Id> {
    pub name: &'static str,
    pub reads: Option<Id>,
    pub writes: Id,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("stage `{stage}` reads a target no earlier stage has written")]
    ReadBeforeWrite { stage: &'static str },
    #[error("stage `{stage}` writes a target that was already written")]
    DuplicateWrite { stage: &'static str },
    #[error("stage `{stage}` samples the target it writes")]
    SelfDependency { stage: &'static str },
    #[error("stage list is empty")]
    Empty,
}

/// Validates the ordered stage list once at construction: every read must be
/// satisfied by an earlier write, no target is written twice, and no stage
/// samples its own output. A list that passes is a linear read-after-write
/// chain and can be executed in order without further synchronization.
pub fn validate_chain<Id: PartialEq + Copy>(stages: &[StagePass<Id>]) -> Result<(), PlanError> {
    if stages.is_empty() {
        return Err(PlanError::Empty);
    }
    let mut written: Vec<Id> = Vec::with_capacity(stages.len());
    for stage in stages {
        if let Some(read) = stage.reads {
            if read == stage.writes {
                return Err(PlanError::SelfDependency { stage: stage.name });
            }
            if !written.contains(&read) {
                return Err(PlanError::ReadBeforeWrite { stage: stage.name });
            }
        }
        if written.contains(&stage.writes) {
            return Err(PlanError::DuplicateWrite { stage: stage.name });
        }
        written.push(stage.writes);
    }
    Ok(())
}
