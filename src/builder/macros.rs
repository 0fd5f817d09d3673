//! Macros for declaring state and event enums.

/// Generate a state enum together with its `State` implementation.
///
/// # Example
///
/// ```
/// use lifecycle::state_enum;
/// use lifecycle::core::State;
///
/// state_enum! {
///     pub enum ShelterState {
///         Sheltered,
///         Rescued,
///         Adopted,
///     }
///     final: [Adopted]
/// }
///
/// assert_eq!(ShelterState::Rescued.name(), "Rescued");
/// assert!(ShelterState::Adopted.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Generate an event enum together with its `Event` implementation.
///
/// # Example
///
/// ```
/// use lifecycle::event_enum;
/// use lifecycle::core::Event;
///
/// event_enum! {
///     pub enum ShelterEvent {
///         Rescue,
///         Adopt,
///     }
/// }
///
/// assert_eq!(ShelterEvent::Adopt.name(), "Adopt");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
