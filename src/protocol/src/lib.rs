pub mod pr_model;
use pr_model::PrModel;

use serde::{Deserialize, Serialize};

fn frame_len(len: usize) -> Result<u32, bincode::Error> {
	u32::try_from(len).map_err(|_| Box::new(bincode::ErrorKind::SizeLimit))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Message {
	WorldUpdate(PrModel),
	Nop,
}

impl Message {
	pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
		bincode::serialize(&self)
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
		bincode::deserialize(bytes)
	}

	// u32 little endian length, then the payload
	pub fn to_frame(&self) -> Result<Vec<u8>, bincode::Error> {
		let body = self.to_bytes()?;
		let len = frame_len(body.len())?;
		let mut result = Vec::with_capacity(body.len() + 4);
		result.extend_from_slice(&len.to_le_bytes());
		result.extend_from_slice(&body);
		Ok(result)
	}

	// returns the message and the number of bytes consumed,
	// None if the buffer does not hold a complete frame yet
	pub fn from_frame(buf: &[u8]) -> Option<Result<(Self, usize), bincode::Error>> {
		let header: [u8; 4] = buf.get(..4)?.try_into().ok()?;
		let len = u32::from_le_bytes(header) as usize;
		let body = buf.get(4..4 + len)?;
		Some(Self::from_bytes(body).map(|msg| (msg, 4 + len)))
	}
}
