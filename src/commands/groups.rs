// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::app::App;
use crate::commands::gate;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(app: &mut App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub
                .get_one::<String>("name")
                .map(String::as_str)
                .unwrap_or_default();
            match gate(app.add_group(name))? {
                Some(true) => println!("Added group '{}'", name.trim()),
                Some(false) => println!("Group '{}' already exists", name.trim()),
                None => {}
            }
        }
        Some(("list", _)) => {
            let data = app
                .settings()
                .groups
                .iter()
                .map(|g| vec![g.clone()])
                .collect();
            println!("{}", pretty_table(&["Group"], data));
        }
        _ => {}
    }
    Ok(())
}
