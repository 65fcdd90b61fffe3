use colored::Colorize;
use launchgrid::api::{CmdMessage, MessageLevel};
use launchgrid::layout::Page;
use launchgrid::model::GridItem;

const NAME_WIDTH: usize = 28;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_pages(pages: &[Page]) {
    let total = pages.len();
    for (p, page) in pages.iter().enumerate() {
        if p > 0 {
            println!();
        }
        println!(
            "{} {}",
            format!("Page {}/{}", p + 1, total).bold(),
            format!("({} items)", page.len()).dimmed()
        );
        for (slot, item) in page.iter().enumerate() {
            print_item(slot, item);
        }
    }
}

fn print_item(slot: usize, item: &GridItem) {
    let idx = format!("{:>3}. ", slot + 1);
    match item {
        GridItem::App(app) => println!(
            "{}{}{}",
            idx,
            pad(&app.name),
            app.path.dimmed()
        ),
        GridItem::Folder(folder) => {
            println!(
                "{}{}{}",
                idx,
                pad(&folder.name).cyan().bold(),
                format!("{} apps", folder.len()).dimmed()
            );
            for app in folder.apps() {
                println!("       - {}{}", pad(&app.name), app.path.dimmed());
            }
        }
    }
}

fn pad(name: &str) -> String {
    let shown: String = if name.chars().count() > NAME_WIDTH - 1 {
        let mut cut: String = name.chars().take(NAME_WIDTH - 2).collect();
        cut.push('…');
        cut
    } else {
        name.to_string()
    };
    format!("{:<width$}", shown, width = NAME_WIDTH)
}
