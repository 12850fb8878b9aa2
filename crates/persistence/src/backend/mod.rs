// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! Connection setup, migrations, and PRAGMA handling live here. Everything
//! that can be written in Diesel DSL lives in `queries/` and `mutations/`.
//!
//! `SQLite` is the only backend. The profile, student, and change-request
//! tables are small and keyed by text identifiers; a single embedded
//! database covers both production and in-memory tests.

pub mod sqlite;
