//! Standard output destination. No rotation; stdout's own lock keeps records whole.

use super::Output;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn write(
        &self,
        rendered: &[u8],
        _message_len: usize,
        _dump_len: usize,
    ) -> Result<(), crate::Error> {
        let mut out = io::stdout().lock();
        out.write_all(rendered)
            .and_then(|()| out.flush())
            .map_err(crate::Error::Write)
    }
}
