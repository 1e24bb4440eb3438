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

use std::{fs, io, path::Path};

/// Write `contents` to `file_path`, creating any missing parent directories
pub fn write_file<C: AsRef<[u8]>>(file_path: &Path, contents: C) -> io::Result<()> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(file_path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_file_nested() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("a").join("b").join("file.txt");

        write_file(&file_path, "one").unwrap();
        write_file(&file_path, "two").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "two");
    }
}
