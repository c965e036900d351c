use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::{env, error::Error};

use kindred_compiler::model::KindList;

/// The kinds every enumerated sequence is built from.
const ALPHABET: [Letter; 3] = [Letter('A'), Letter('B'), Letter('C')];

/// A kind used as a replacement, which no enumerated sequence contains.
const OUTSIDER: Letter = Letter('D');

const MAX_LENGTH: usize = 4;

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate tests asserting that the type-level algebra agrees with the value-level
    // model on every sequence within a size bound.
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("enumerated_sequences.rs");
    let mut f = BufWriter::new(File::create(&dest_path)?);

    // File header
    writeln!(f, "use kindred::prelude::*;")?;
    writeln!(f, "#[allow(unused_imports)]")?;
    writeln!(
        f,
        "use kindred::sequence::{{Appended, CountOf, Deduplicated, Erased, ErasedAll, \
         LengthOf, Replaced, ReplacedAll, Reversed}};"
    )?;
    writeln!(f, "use kindred::unary::UnaryOf;")?;
    writeln!(
        f,
        "use static_assertions::{{assert_type_eq_all, const_assert_eq}};"
    )?;
    writeln!(f)?;
    for letter in ALPHABET.iter().chain(Some(&OUTSIDER)) {
        writeln!(f, "#[allow(dead_code)]")?;
        writeln!(f, "#[derive(Kind)]")?;
        writeln!(f, "struct {};", letter)?;
    }
    writeln!(f)?;

    // Write out the test
    writeln!(f, "#[test]")?;
    writeln!(f, "fn enumerated_sequences() {{")?;
    for s in KindList::enumerate(&ALPHABET, MAX_LENGTH) {
        writeln!(f, "    // {}", Flat(&s))?;
        writeln!(f, "    const_assert_eq!(<{} as Sequence>::LENGTH, {});", s, s.len())?;
        writeln!(f, "    assert_type_eq_all!(LengthOf<{}>, UnaryOf<{}>);", s, s.len())?;
        writeln!(f, "    assert_type_eq_all!(Reversed<{}>, {});", s, s.reverse())?;
        writeln!(
            f,
            "    assert_type_eq_all!(Deduplicated<{}>, {});",
            s,
            s.no_duplicates()
        )?;
        writeln!(f, "    assert_type_eq_all!(Appended<{}, {}>, {});", s, s, s.append_list(&s))?;
        for k in &ALPHABET {
            writeln!(
                f,
                "    const_assert_eq!(<{} as IndexOf<{}>>::VALUE, {});",
                s,
                k,
                s.index_of(k)
            )?;
            writeln!(
                f,
                "    assert_type_eq_all!(CountOf<{}, {}>, UnaryOf<{}>);",
                s,
                k,
                s.occurrences(k)
            )?;
            writeln!(f, "    assert_type_eq_all!(Erased<{}, {}>, {});", s, k, s.erase(k))?;
            writeln!(
                f,
                "    assert_type_eq_all!(ErasedAll<{}, {}>, {});",
                s,
                k,
                s.erase_all(k)
            )?;
            writeln!(
                f,
                "    assert_type_eq_all!(Replaced<{}, {}, {}>, {});",
                s,
                k,
                OUTSIDER,
                s.replace(k, &OUTSIDER)
            )?;
            writeln!(
                f,
                "    assert_type_eq_all!(ReplacedAll<{}, {}, {}>, {});",
                s,
                k,
                OUTSIDER,
                s.replace_all(k, &OUTSIDER)
            )?;
            writeln!(
                f,
                "    assert_type_eq_all!(Appended<{}, {}>, {});",
                s,
                k,
                s.append_kind(*k)
            )?;
        }
    }
    writeln!(f, "}}")?;
    f.flush()?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Letter(char);

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Renders a sequence the way `Seq!` writes it, for the comments in the generated file.
struct Flat<'a>(&'a KindList<Letter>);

impl Display for Flat<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Seq![")?;
        for (i, letter) in self.0 .0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", letter)?;
        }
        write!(f, "]")
    }
}
