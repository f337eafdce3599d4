use dialoguer::{Select, theme::ColorfulTheme};

#[macro_export]
macro_rules! display_error {
    ($a:expr) => {
        eprintln!("{}", format!("Error: {}", $a).red())
    };
}

pub fn prompt_select<T>(q: &str, items: &Vec<T>) -> usize
where
    T: std::fmt::Display,
{
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(q)
        .default(0)
        .items(items)
        .interact()
        .expect("error trying to render a select")
}
