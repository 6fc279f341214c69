/// Byte width of a binary identifier.
pub const IDENT_LEN: usize = 20;

/// Fixed-width binary identifier rendered as `0x…` hex text on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ident(
	/// Raw identifier bytes.
	pub [u8; IDENT_LEN],
);

impl Ident {
	/// Parse hex text into a fixed-width identifier.
	///
	/// Accepts an optional `0x`/`0X` prefix and mixed case. Odd-length input
	/// is zero-extended on the left. Returns `None` on non-hex digits.
	pub fn from_hex(text: &str) -> Option<Ident> {
		let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(text);
		let bytes = if digits.len() % 2 == 1 {
			hex::decode(format!("0{digits}")).ok()?
		} else {
			hex::decode(digits).ok()?
		};
		Some(Ident::from_bytes(&bytes))
	}

	/// Build an identifier from raw bytes.
	///
	/// Longer input keeps the rightmost `IDENT_LEN` bytes; shorter input is
	/// left-padded with zeros.
	pub fn from_bytes(bytes: &[u8]) -> Ident {
		let mut out = [0_u8; IDENT_LEN];
		if bytes.len() >= IDENT_LEN {
			out.copy_from_slice(&bytes[bytes.len() - IDENT_LEN..]);
		} else {
			out[IDENT_LEN - bytes.len()..].copy_from_slice(bytes);
		}
		Ident(out)
	}

	/// Render as `0x`-prefixed lowercase hex.
	pub fn to_hex(&self) -> String {
		format!("0x{}", hex::encode(self.0))
	}
}
