//! Describe widgets by the set of properties they carry, and print them.

use kindred::prelude::*;
use kindred::sequence::{Appended, Deduplicated};

#[derive(Debug, Clone, Default, Kind)]
struct Name(String);

#[derive(Debug, Clone, Copy, Default, Kind)]
struct Size {
    width: u32,
    height: u32,
}

#[derive(Debug, Clone, Copy, Default, Kind)]
struct Visible(bool);

#[derive(Debug, Clone, Copy, Default, Kind)]
struct Tooltip(&'static str);

/// Properties every widget has.
type Base = Seq![Name, Size, Visible];

/// A button: the base properties plus a tooltip. Listing `Visible` again is harmless once
/// duplicates are removed.
type Button = Deduplicated<Appended<Base, Seq![Visible, Tooltip]>>;

fn describe<C>(widget: &C) -> String
where
    C: Keyed<Name, Field = Name> + Keyed<Size, Field = Size> + Keyed<Visible, Field = Visible>,
{
    let name = <C as Keyed<Name>>::by_kind(widget);
    let size = <C as Keyed<Size>>::by_kind(widget);
    let visible = <C as Keyed<Visible>>::by_kind(widget);
    format!(
        "{} ({}x{}){}",
        name.0,
        size.width,
        size.height,
        if visible.0 { "" } else { " [hidden]" }
    )
}

fn main() {
    let mut label = Record::<Base>::new((
        Name("title".to_owned()),
        Size {
            width: 120,
            height: 16,
        },
        Visible(true),
    ));

    let mut button = Record::<Button>::default();
    button.field_mut::<Name>().0 = "ok".to_owned();
    *button.field_mut::<Size>() = Size {
        width: 40,
        height: 20,
    };
    button.field_mut::<Tooltip>().0 = "Confirm the dialog";

    println!("{}", describe(&label));
    println!("{}", describe(&button));
    println!("  tooltip: {}", button.at::<3>().0);

    label.field_mut::<Visible>().0 = false;
    println!("{}", describe(&label));
}
