use crate::bodies::Body;

/// Receives the body list after every tick and every insertion.
///
/// Bodies are handed out by shared reference; a renderer only reads them.
pub trait Renderer {
    /// Draws one frame
    fn render(&mut self, bodies: &[Body]);
}

impl<F: FnMut(&[Body])> Renderer for F {
    fn render(&mut self, bodies: &[Body]) {
        self(bodies)
    }
}

/// Renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _bodies: &[Body]) {}
}

/// Renderer that keeps a copy of every frame it receives
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    frames: Vec<Vec<Body>>,
}

impl FrameRecorder {
    /// Creates an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded frames, oldest first
    pub fn frames(&self) -> &[Vec<Body>] {
        &self.frames
    }

    /// Returns the most recent frame
    pub fn last_frame(&self) -> Option<&[Body]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Returns the number of frames received
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl Renderer for FrameRecorder {
    fn render(&mut self, bodies: &[Body]) {
        self.frames.push(bodies.to_vec());
    }
}
