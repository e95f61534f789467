use log::warn;
use web_sys::HtmlAudioElement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
	PlaceVertex,
	Undo,
	PlaceEdge,
}

impl Cue {
	fn path(self) -> &'static str {
		match self {
			Cue::PlaceVertex => "sfx/pop.wav",
			Cue::Undo => "sfx/undo.wav",
			Cue::PlaceEdge => "sfx/line.wav",
		}
	}
}

/// Sound samples for the three cues. A sample that fails to load stays silent.
#[derive(Default)]
pub struct SoundBank {
	pop: Option<HtmlAudioElement>,
	undo: Option<HtmlAudioElement>,
	line: Option<HtmlAudioElement>,
}

impl SoundBank {
	pub fn load() -> Self {
		Self {
			pop: load_sample(Cue::PlaceVertex),
			undo: load_sample(Cue::Undo),
			line: load_sample(Cue::PlaceEdge),
		}
	}

	/// Fire and forget: the playback promise is dropped.
	pub fn play(&self, cue: Cue) {
		let sample = match cue {
			Cue::PlaceVertex => &self.pop,
			Cue::Undo => &self.undo,
			Cue::PlaceEdge => &self.line,
		};
		if let Some(audio) = sample {
			audio.set_current_time(0.0);
			let _ = audio.play();
		}
	}
}

fn load_sample(cue: Cue) -> Option<HtmlAudioElement> {
	match HtmlAudioElement::new_with_src(cue.path()) {
		Ok(audio) => Some(audio),
		Err(e) => {
			warn!("could not load {}: {:?}", cue.path(), e);
			None
		}
	}
}
