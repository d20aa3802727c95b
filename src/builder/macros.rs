//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from a
/// declarative literal.
///
/// Each state names its transitions as `event => destination` pairs; a
/// state with no transitions uses an empty block. The macro panics when
/// the literal declares no states, mirroring the builder's validation.
///
/// # Example
///
/// ```
/// use turnstile::machine_config;
///
/// let config = machine_config! {
///     initial: "locked",
///     states: {
///         "locked" => { "coin" => "unlocked" },
///         "unlocked" => { "push" => "locked" },
///     }
/// };
///
/// assert_eq!(config.initial, "locked");
/// assert_eq!(config.states.len(), 2);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $( $event:expr => $target:expr ),* $(,)? }
            ),* $(,)?
        }
    ) => {{
        let builder = $crate::builder::ConfigBuilder::new().initial($initial);
        $(
            let builder = builder.state($state);
            $(
                let builder = builder.transition($state, $event, $target);
            )*
        )*
        builder
            .build()
            .expect("machine_config! literal must declare at least one state")
    }};
}
