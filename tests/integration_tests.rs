use argfmt::{Context, Format, FormatError, Type, arg};
use pretty_assertions::assert_eq;
use std::fmt::Write;

struct Point {
    x: i32,
    y: i32,
}

impl Format for Point {
    fn format(&self, ctx: &mut Context<'_, '_>) -> Result<(), FormatError> {
        let spec = ctx.parse_spec();
        if spec.as_str() == Some("x") {
            write!(ctx, "{}", self.x)?;
        } else {
            write!(ctx, "({}, {})", self.x, self.y)?;
        }
        Ok(())
    }
}

/// Opts into integer formatting through the explicit constructor.
struct Percent(u8);

impl Format for Percent {
    fn format(&self, ctx: &mut Context<'_, '_>) -> Result<(), FormatError> {
        ctx.write_arg(self.make_arg())
    }

    fn make_arg(&self) -> argfmt::Arg<'_> {
        argfmt::Arg::uint(self.0.into())
    }
}

/// Captured as an empty slot.
struct Nothing;

impl Format for Nothing {
    fn format(&self, _: &mut Context<'_, '_>) -> Result<(), FormatError> {
        Ok(())
    }

    fn make_arg(&self) -> argfmt::Arg<'_> {
        argfmt::Arg::none()
    }
}

fn format_error(result: Result<String, FormatError>) -> String {
    match result {
        Err(error) => error.to_string(),
        Ok(out) => panic!("expected an error, got {:?}", out),
    }
}

#[test]
fn test_basic_automatic_fields() {
    let out = argfmt::format!("{} and {} and {}", 42, "abc1", 1.5).unwrap();
    assert_eq!(out, "42 and abc1 and 1.5");
}

#[test]
fn test_no_arguments() {
    assert_eq!(argfmt::format!("plain {{text}}").unwrap(), "plain {text}");
}

#[test]
fn test_positional_fields() {
    let out = argfmt::format!("{1} {0} {1}", "world", "hello").unwrap();
    assert_eq!(out, "hello world hello");
}

#[test]
fn test_named_sugar() {
    let out = argfmt::format!("{a1}", a1 = 42).unwrap();
    assert_eq!(out, "42");

    let r#type = "raw";
    let out = argfmt::format!("{type}!", r#type = r#type).unwrap();
    assert_eq!(out, "raw!");
}

#[test]
fn test_explicit_named_argument() {
    let seconds = 1.25;
    let out = argfmt::format!("Elapsed time: {s} seconds", arg("s", &seconds)).unwrap();
    assert_eq!(out, "Elapsed time: 1.25 seconds");
}

#[test]
fn test_named_argument_is_also_positional() {
    let out = argfmt::format!("{} {}", 1, n = "two").unwrap();
    assert_eq!(out, "1 two");
}

#[test]
fn test_missing_named_argument() {
    assert_eq!(
        format_error(argfmt::format!("{b}", a = 1)),
        "argument not found"
    );
}

#[test]
fn test_first_duplicate_name_wins() {
    let out = argfmt::format!("{x}", arg("x", &1), arg("x", &2)).unwrap();
    assert_eq!(out, "1");
}

#[test]
fn test_renamed_named_argument() {
    let inner = arg("inner", &5);
    let out = argfmt::format!("{outer} {0}", arg("outer", &inner)).unwrap();
    assert_eq!(out, "5 5");
    assert_eq!(
        format_error(argfmt::format!("{inner}", outer = inner)),
        "argument not found"
    );
}

#[test]
fn test_names_after_an_empty_slot() {
    let out = argfmt::format!("{1}{n}", Nothing, 1, n = 2).unwrap();
    assert_eq!(out, "12");
}

#[test]
fn test_index_mode_exclusivity() {
    assert_eq!(
        format_error(argfmt::format!("{} {0}", 1)),
        "cannot switch from automatic to manual argument indexing"
    );
    assert_eq!(
        format_error(argfmt::format!("{0} {}", 1)),
        "cannot switch from manual to automatic argument indexing"
    );
}

#[test]
fn test_all_builtin_types() {
    let text = String::from("owned");
    let pointer = std::ptr::null::<()>();
    let out = argfmt::format!(
        "{} {} {} {} {} {} {} {} {} {} {}",
        -8i8,
        300u16,
        -5i64,
        u64::MAX,
        2.5f32,
        true,
        'é',
        text,
        c"cstr",
        usize::MAX,
        pointer
    )
    .unwrap();
    assert_eq!(
        out,
        std::format!(
            "-8 300 -5 {} 2.5 true é owned cstr {} 0x0",
            u64::MAX,
            usize::MAX
        )
    );
}

#[test]
fn test_sixteen_arguments_use_unpacked_store() {
    let out = argfmt::format!(
        "{}{}{}{}{}{}{}{}{}{}{}{}{}{}{}{}",
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, "a", "b", "c", "d", "e", "f"
    )
    .unwrap();
    assert_eq!(out, "0123456789abcdef");
}

#[test]
fn test_fifteenth_argument_is_reachable() {
    let out = argfmt::format!(
        "{14}",
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, "last"
    )
    .unwrap();
    assert_eq!(out, "last");
}

#[test]
fn test_custom_type_with_spec() {
    let point = Point { x: 3, y: -4 };
    assert_eq!(argfmt::format!("{}", point).unwrap(), "(3, -4)");
    assert_eq!(argfmt::format!("{:x}", point).unwrap(), "3");
    assert_eq!(argfmt::format!("{p:x}/{p}", p = point).unwrap(), "3/(3, -4)");
}

#[test]
fn test_custom_type_opting_into_integer() {
    let value = Percent(75);
    assert_eq!(argfmt::format!("{}%", value).unwrap(), "75%");
    assert_eq!(Format::<u8>::make_arg(&value).ty(), Type::UInt);
}

#[test]
fn test_builtin_rejects_spec() {
    assert_eq!(
        format_error(argfmt::format!("{:>8}", 1)),
        "unknown format specifier"
    );
}

#[test]
fn test_temporaries_live_through_the_call() {
    let out = argfmt::format!("{}-{}", String::from("tmp"), 7 * 6).unwrap();
    assert_eq!(out, "tmp-42");
}

#[test]
fn test_format_to_narrow() {
    let mut out = b"> ".to_vec();
    argfmt::format_to!(&mut out, "{}:{}", "k", 9).unwrap();
    assert_eq!(out, b"> k:9");
}

#[test]
fn test_format_to_wide() {
    let mut out: Vec<char> = Vec::new();
    let word: Vec<char> = "größe".chars().collect();
    argfmt::format_to!(&mut out, "{w} = {}", 3, w = word).unwrap();
    assert_eq!(out.iter().collect::<String>(), "größe = 3");
}

#[test]
fn test_print_macros() {
    argfmt::print!("{} ", "print").unwrap();
    argfmt::println!("{}", "println").unwrap();
    argfmt::println!().unwrap();
}

#[test]
fn test_print_reports_format_errors_as_io_errors() {
    let error = argfmt::print!("{}").unwrap_err();
    assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
}

#[test]
fn test_max_packed_args_match_macro_threshold() {
    // The proc-macro crate keeps its own copy of this threshold. Had the two
    // drifted apart, the 15-argument call above would not compile.
    assert_eq!(argfmt::MAX_PACKED_ARGS, 15);
}
