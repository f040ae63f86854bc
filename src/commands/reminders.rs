// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use anyhow::Result;

pub fn handle(app: &mut App) -> Result<()> {
    if !app.settings().notifications {
        println!("Notifications are off");
        return Ok(());
    }
    match app.check_reminders()? {
        Some(toast) => println!("🔔 {}", toast.message),
        None => println!("No reminders due"),
    }
    Ok(())
}
