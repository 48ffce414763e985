// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Error types for map building and persistence

/// Failure while building, saving or loading a map
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The character grid does not have the required dimensions
    #[error("map grid must be {expected}x{expected}, found {rows} rows with {cols} columns in row {row}")]
    GridSize {
        /// Required width and height
        expected: usize,
        /// Number of rows found
        rows: usize,
        /// Index of the first offending row, or the row count when short
        row: usize,
        /// Columns in that row
        cols: usize,
    },

    /// A save line could not be parsed
    #[error("malformed save line {line}: {reason}")]
    MalformedLine {
        /// One-based line number
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// A save line names a symbol no entity template exists for
    #[error("unknown map symbol '{symbol}' on line {line}")]
    UnknownSymbol {
        /// The offending symbol
        symbol: String,
        /// One-based line number
        line: usize,
    },

    /// Reading or writing the save file failed
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MapError::MalformedLine {
            line: 3,
            reason: "expected 3 fields, found 2".to_string(),
        };
        assert_eq!(err.to_string(), "malformed save line 3: expected 3 fields, found 2");

        let err = MapError::UnknownSymbol {
            symbol: "Z".to_string(),
            line: 1,
        };
        assert_eq!(err.to_string(), "unknown map symbol 'Z' on line 1");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: MapError = io.into();
        assert!(matches!(err, MapError::Io(_)));
    }
}
