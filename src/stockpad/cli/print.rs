use colored::Colorize;
use stockpad::commands::{CmdMessage, MessageLevel};
use stockpad::error::Result;
use stockpad::notify::Notice;
use stockpad::render::{render_card, render_list, ProductListView};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", paint(&message.content, message.level));
    }
}

pub(super) fn print_notice(notice: Option<&Notice>) {
    if let Some(notice) = notice {
        println!("{}", paint(&notice.message, notice.level));
    }
}

pub(super) fn print_list(view: &ProductListView, use_color: bool) -> Result<()> {
    println!("{}", render_list(view, use_color)?);
    Ok(())
}

pub(super) fn print_cards(view: &ProductListView, use_color: bool) -> Result<()> {
    for (i, card) in view.cards().iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", render_card(card, use_color)?);
    }
    Ok(())
}

fn paint(text: &str, level: MessageLevel) -> colored::ColoredString {
    match level {
        MessageLevel::Info => text.dimmed(),
        MessageLevel::Success => text.green(),
        MessageLevel::Warning => text.yellow(),
        MessageLevel::Error => text.red(),
    }
}
