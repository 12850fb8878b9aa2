// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations.
//!
//! Every mutation is a single statement. Callers that need several writes
//! run them as separate calls; there is no cross-table transaction.

pub mod change_requests;
pub mod profiles;
pub mod review_events;
pub mod students;
