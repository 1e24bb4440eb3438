/*
 * Hytale Pack Tools - Manifest generator for Hytale server packs
 * Copyright (C) 2026 Josh Kropf <josh@slashdev.ca>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

mod generate;
mod init;
mod validate;

pub use {
    generate::generate_manifest,
    init::init_project,
    validate::{check_manifest, validate_project}
};

use console::style;
use dialoguer::theme::ColorfulTheme;

fn console_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {warning}", style("warning:").yellow().bold());
    }
}

fn print_errors(errors: &[String]) {
    for error in errors {
        eprintln!("{} {error}", style("error:").red().bold());
    }
}
