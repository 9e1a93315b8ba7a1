pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	Quit,
}
