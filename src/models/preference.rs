use serde::{Deserialize, Serialize};

/// Lifecycle of a single categorical preference
///
/// A preference starts `Unset`, is adopted wholesale on a positive rating,
/// and erodes through `DislikeStreak` on consecutive negative ratings of
/// matching pets until it is forgotten. There is no terminal state; the
/// profile stays live across any rating sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Preference<T> {
    #[default]
    Unset,
    Preferred(T),
    DislikeStreak { value: T, count: u32 },
}

impl<T> Preference<T> {
    /// The currently held value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Unset => None,
            Self::Preferred(value) => Some(value),
            Self::DislikeStreak { value, .. } => Some(value),
        }
    }

    /// Length of the running dislike streak (0 outside a streak)
    pub fn dislike_count(&self) -> u32 {
        match self {
            Self::DislikeStreak { count, .. } => *count,
            _ => 0,
        }
    }

    /// True when no value is held
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl<T: Clone> Preference<T> {
    /// Transition on a positive rating: adopt the rated pet's attribute
    ///
    /// An absent attribute clears the preference, the same way the rated
    /// pet's value would have been copied over verbatim.
    pub fn on_positive(attribute: Option<T>) -> Self {
        match attribute {
            Some(value) => Self::Preferred(value),
            None => Self::Unset,
        }
    }

    /// Transition on a negative rating
    ///
    /// `attribute_matches` says whether the rated pet carries the currently
    /// held value. A matching dislike extends the streak and forgets the
    /// preference once `threshold` is reached; a non-matching dislike resets
    /// the streak and keeps the preference.
    pub fn on_negative(&self, attribute_matches: bool, threshold: u32) -> Self {
        match self {
            Self::Unset => Self::Unset,
            Self::Preferred(value) => {
                if attribute_matches {
                    Self::streak(value.clone(), 1, threshold)
                } else {
                    Self::Preferred(value.clone())
                }
            }
            Self::DislikeStreak { value, count } => {
                if attribute_matches {
                    Self::streak(value.clone(), count + 1, threshold)
                } else {
                    Self::Preferred(value.clone())
                }
            }
        }
    }

    fn streak(value: T, count: u32, threshold: u32) -> Self {
        if count >= threshold {
            Self::Unset
        } else {
            Self::DislikeStreak { value, count }
        }
    }
}
