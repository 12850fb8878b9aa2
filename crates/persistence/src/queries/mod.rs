// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `profiles`: profile lookup by user
//! - `students`: student record lookup by user
//! - `change_requests`: change request lookup and stranded-request listing
//! - `review_events`: review progress log for a request

pub mod change_requests;
pub mod profiles;
pub mod review_events;
pub mod students;
