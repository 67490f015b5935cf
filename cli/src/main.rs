// SPDX-FileCopyrightText: 2025-2026 Todolist Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    todolist_cli::run().await
}
