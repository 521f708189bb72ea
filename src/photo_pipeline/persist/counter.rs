/// Monotonic photo sequence. Starts at 0 so the first photo is number 1.
///
/// Numbers are never handed out twice, even when the write that claimed one
/// fails afterwards.
#[derive(Debug, Default)]
pub struct PhotoCounter {
    last: u32,
}

impl PhotoCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes numbering after `last`, e.g. from photos already on disk.
    pub fn starting_after(last: u32) -> Self {
        Self { last }
    }

    /// Claims the next sequence number, `None` once `u32::MAX` has been used.
    pub fn next(&mut self) -> Option<u32> {
        self.last = self.last.checked_add(1)?;
        Some(self.last)
    }

    /// Most recently claimed number, 0 if none yet.
    pub fn last(&self) -> u32 {
        self.last
    }
}
