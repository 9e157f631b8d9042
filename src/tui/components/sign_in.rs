//! Shown instead of the queue when nobody is signed in

use iocraft::prelude::*;

use crate::queue::model::SIGN_IN_PROMPT;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct SignInPromptProps {}

#[component]
pub fn SignInPrompt(_props: &SignInPromptProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            Text(content: SIGN_IN_PROMPT, color: theme.text, weight: Weight::Bold)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_only_the_prompt() {
        let mut screen = element! {
            View(width: 60, height: 5) {
                SignInPrompt
            }
        };
        assert_eq!(screen.to_string().trim(), SIGN_IN_PROMPT);
    }
}
