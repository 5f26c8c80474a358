/// Returns the window of `len` characters starting at `start`, wrapping
/// around to the head of `chars` when the end is reached.
///
/// The text is cycled as many times as needed, so the window always holds
/// exactly `len` characters.
///
/// Returns `None` if `chars` is empty.
///
/// Example: `"abc"`, start `2`, len `3` → `"cab"`
pub fn wrap_window(chars: &[char], start: usize, len: usize) -> Option<String> {
	if chars.is_empty() {
		return None;
	}
	Some(chars.iter().cycle().skip(start % chars.len()).take(len).collect())
}

/// Splits a window into its first `k` characters and the full window.
///
/// `window` must hold at least `k` characters.
pub fn split_prefix(window: &str, k: usize) -> (&str, &str) {
	let end = window.char_indices().nth(k).map_or(window.len(), |(index, _)| index);
	(&window[..end], window)
}

/// Iterates over the `k + 1` character windows of `chars`, one per offset.
pub fn windows(chars: &[char], k: usize) -> impl Iterator<Item = String> + '_ {
	(0..chars.len()).filter_map(move |start| wrap_window(chars, start, k + 1))
}
