// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use thiserror::Error;

/// Errors returned by `Solver::solve`.
#[derive(Debug, Error)]
pub enum SolverError {
    /// A worker thread could not be spawned.
    #[error("failed to spawn search worker: {0}")]
    Spawn(#[from] std::io::Error),

    /// All workers finished without installing a layout.
    #[error("search finished without finding any layout")]
    NoIncumbent,
}

#[cfg(test)]
mod tests {
    use super::SolverError;

    #[test]
    fn test_display() {
        let err = SolverError::from(std::io::Error::other("out of threads"));
        assert_eq!(
            err.to_string(),
            "failed to spawn search worker: out of threads"
        );
        assert_eq!(
            SolverError::NoIncumbent.to_string(),
            "search finished without finding any layout"
        );
    }
}
