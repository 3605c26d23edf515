use crate::{domain::post::commands::CreatePost, services::response::ServiceError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ComposeState {
	#[default]
	Closed,
	Open,
}

/// The "new post" dialog. Only one exists; opening it again while open just
/// clears the fields.
#[derive(Debug, Default)]
pub struct ComposeModal {
	state: ComposeState,
	pub body: String,
	pub tags: String,
}

impl ComposeModal {
	pub fn open(&mut self) {
		self.body.clear();
		self.tags.clear();
		self.state = ComposeState::Open;
	}

	pub fn close(&mut self) {
		self.state = ComposeState::Closed;
	}

	pub fn is_open(&self) -> bool {
		self.state == ComposeState::Open
	}

	pub fn state(&self) -> ComposeState {
		self.state
	}

	/// Validates the fields and closes the modal, handing back the command to
	/// run. A rejected submit leaves the modal open with its input intact.
	pub fn submit(&mut self) -> Result<CreatePost, ServiceError> {
		if !self.is_open() {
			return Err(ServiceError::BadRequest);
		}
		let cmd = CreatePost::new(self.body.trim(), self.tags.as_str());
		cmd.validated_body()?;
		self.close();
		Ok(cmd)
	}
}
