
/// Copies as much of `value` as fits into `buffer` and appends a NUL terminator.
///
/// At most `buffer.len() - 1` bytes are copied; longer values are truncated silently. Returns the
/// number of value bytes written, not counting the terminator. An empty buffer receives nothing.
pub fn truncating_copy(value: &[u8], buffer: &mut [u8]) -> usize {
  let Some(room) = buffer.len().checked_sub(1) else {
    return 0;
  };
  let copied = value.len().min(room);
  buffer[..copied].copy_from_slice(&value[..copied]);
  buffer[copied] = 0;
  copied
}

/// Returns the bytes of `buffer` up to, and excluding, the first NUL.
///
/// A buffer without a terminator is returned whole.
#[must_use]
pub fn terminated(buffer: &[u8]) -> &[u8] {
  let end = buffer.iter().position(|byte| *byte == 0).unwrap_or(buffer.len());
  &buffer[..end]
}
