// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{DomainError, ReviewStage, StageOutcome};

#[test]
fn test_review_stage_round_trips_through_str() {
    for stage in [
        ReviewStage::ProfileReconciled,
        ReviewStage::StudentReconciled,
        ReviewStage::IdentityEmailSynced,
        ReviewStage::Finalized,
    ] {
        assert_eq!(ReviewStage::from_str(stage.as_str()).unwrap(), stage);
    }
}

#[test]
fn test_unknown_stage_and_outcome_are_rejected() {
    assert_eq!(
        ReviewStage::from_str("emailed"),
        Err(DomainError::InvalidStage(String::from("emailed")))
    );
    assert_eq!(
        StageOutcome::from_str("skipped"),
        Err(DomainError::InvalidStageOutcome(String::from("skipped")))
    );
}
