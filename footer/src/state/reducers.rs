use crate::model::PlaybackItem;

use super::store::PlaybackState;

/// Updates accepted by the playback store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackAction {
    SetPlaying(bool),
    SetItem(Option<PlaybackItem>),
}

impl PlaybackAction {
    /// Event tag used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            PlaybackAction::SetPlaying(_) => "SET_PLAYING",
            PlaybackAction::SetItem(_) => "SET_ITEM",
        }
    }
}

pub fn playback_reducer(state: &mut PlaybackState, action: PlaybackAction) {
    let kind = action.kind();
    match action {
        PlaybackAction::SetPlaying(playing) => {
            log::debug!("{} action received: {}", kind, playing);
            state.playing = playing;
        }
        PlaybackAction::SetItem(item) => {
            log::debug!(
                "{} action received: {}",
                kind,
                item.as_ref().map(|item| item.name.as_str()).unwrap_or("<none>")
            );
            state.item = item;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_playing_only_touches_playing() {
        let mut state = PlaybackState {
            item: Some(PlaybackItem::new("A")),
            playing: false,
        };

        playback_reducer(&mut state, PlaybackAction::SetPlaying(true));

        assert!(state.playing);
        assert_eq!(state.item, Some(PlaybackItem::new("A")));
    }

    #[test]
    fn test_set_item_replaces_and_clears() {
        let mut state = PlaybackState::default();

        playback_reducer(&mut state, PlaybackAction::SetItem(Some(PlaybackItem::new("B"))));
        assert_eq!(state.item.as_ref().map(|i| i.name.as_str()), Some("B"));

        playback_reducer(&mut state, PlaybackAction::SetItem(None));
        assert!(state.item.is_none());
        assert!(!state.playing);
    }

    #[test]
    fn test_action_kind() {
        assert_eq!(PlaybackAction::SetPlaying(true).kind(), "SET_PLAYING");
        assert_eq!(PlaybackAction::SetItem(None).kind(), "SET_ITEM");
    }
}
