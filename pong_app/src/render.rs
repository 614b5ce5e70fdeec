use std::io::{self, Write};

use game_core::RenderSnapshot;

/// Draws one frame from a snapshot
pub trait Renderer {
    fn render(&mut self, snapshot: &RenderSnapshot) -> io::Result<()>;
}

/// Writes each snapshot as one line of JSON, for piping into a viewer
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, snapshot: &RenderSnapshot) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}
