use bitflags::bitflags;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

bitflags! {
    /// Markers the renderer draws on top of a body's fill
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
    pub struct DisplayFlags: u8 {
        /// Draw the horizontal minus bar of a negatively charged body
        const NEGATIVE = 0x01;

        /// Draw the outline that marks a pinned body
        const OUTLINED = 0x02;
    }
}

/// Display payload carried by every body.
///
/// The engine moves this around with the body but never reads it; the
/// renderer owns its meaning.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DisplayAttrs {
    /// Fill colour, usually a `#rrggbb` string
    pub fill: String,

    /// Stroke colour, if the body is outlined
    pub stroke: Option<String>,

    /// Extra markers
    pub flags: DisplayFlags,
}

impl DisplayAttrs {
    /// Creates display attributes with just a fill colour
    pub fn filled(fill: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            stroke: None,
            flags: DisplayFlags::empty(),
        }
    }

    /// Sets the stroke colour
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    /// Adds display markers
    pub fn with_flags(mut self, flags: DisplayFlags) -> Self {
        self.flags.insert(flags);
        self
    }
}
