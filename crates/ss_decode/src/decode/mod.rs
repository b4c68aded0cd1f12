//! The decoding traits.
//!
//! ## Menu
//!
//! - [`Decode`]: a type that can be read from a [`TokenRead`].
//! - [`Decoder`]: a value that reads a `T` from a [`TokenRead`]; derived
//!   types get a zero-sized one, `<TypeName>Decoder`.
//! - [`Decodable`]: a derived type, which names its decoder and carries a
//!   static [`TypeInfo`](crate::info::TypeInfo).
//! - [`from_tape`] / [`from_json`]: decode exactly one value.

// -----------------------------------------------------------------------------
// Modules

mod impls;

// -----------------------------------------------------------------------------
// Exports

use crate::FormatError;
use crate::info::Described;
use crate::token::{TokenRead, TokenTape};

// -----------------------------------------------------------------------------
// Traits

/// A type that can be read from a token stream.
///
/// Implemented for the primitive types, `String`, `Option`, `Vec` and `Box`,
/// and by `#[derive(Decode)]`, which delegates to the type's decoder.
///
/// # Example
///
/// ```
/// use ss_decode::Decode;
/// use ss_decode::token::{Token, TokenTape};
///
/// let mut tape = TokenTape::new(vec![Token::Null, Token::from(true)]);
///
/// assert_eq!(<Option<bool>>::decode(&mut tape).unwrap(), None);
/// assert_eq!(<Option<bool>>::decode(&mut tape).unwrap(), Some(true));
/// ```
pub trait Decode: Sized {
    /// Reads one value, consuming exactly its tokens.
    fn decode(reader: &mut dyn TokenRead) -> Result<Self, FormatError>;
}

/// A stateless routine that reads a `T` from a token stream.
///
/// Derived decoders are zero-sized singletons reached through
/// `<TypeName>Decoder::instance()` or [`Decodable::decoder`].
pub trait Decoder<T>: Send + Sync + 'static {
    /// Reads one `T`, consuming exactly its tokens.
    fn decode(&self, reader: &mut dyn TokenRead) -> Result<T, FormatError>;
}

/// A type with a generated decoder.
///
/// Implemented by `#[derive(Decode)]`.
pub trait Decodable: Decode + Described + 'static {
    /// The generated `<TypeName>Decoder`.
    type Decoder: Decoder<Self>;

    /// Returns the singleton decoder instance.
    fn decoder() -> &'static Self::Decoder;
}

// -----------------------------------------------------------------------------
// Functions

/// Decodes a single `T` that must span the whole tape.
///
/// # Errors
///
/// Any error of `T`'s decoder, or [`FormatError::TrailingTokens`] if tokens
/// are left after the value.
pub fn from_tape<T: Decode>(mut tape: TokenTape) -> Result<T, FormatError> {
    let value = T::decode(&mut tape)?;
    match tape.remaining() {
        0 => Ok(value),
        count => Err(FormatError::TrailingTokens { count }),
    }
}

/// Decodes a single `T` from JSON text.
///
/// # Example
///
/// ```
/// use ss_decode::{Decode, from_json};
///
/// #[derive(Decode, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// assert_eq!(from_json::<Point>(r#"{"y": 2, "x": 1}"#).unwrap(), Point { x: 1, y: 2 });
/// assert_eq!(from_json::<Vec<u8>>("[1, 2]").unwrap(), [1, 2]);
/// ```
///
/// # Errors
///
/// [`FormatError::Syntax`] for malformed text, then as [`from_tape`].
#[cfg(feature = "json")]
pub fn from_json<T: Decode>(source: &str) -> Result<T, FormatError> {
    from_tape(TokenTape::from_json(source)?)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::info::Described;
    use crate::token::{Number, Token, TokenKind, TokenRead, TokenTape};
    use crate::{Decodable, Decode, Decoder, FormatError, from_tape};

    fn tape(json: &str) -> TokenTape {
        let mut de = serde_json::Deserializer::from_str(json);
        TokenTape::record(&mut de).unwrap()
    }

    fn decode<T: Decode>(json: &str) -> Result<T, FormatError> {
        from_tape(tape(json))
    }

    // Members start at `Default::default()`, nesting `Box<Point>` needs it.
    #[derive(Decode, Debug, Default, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Decode, Debug, PartialEq)]
    enum Color {
        Red,
        Green,
        Blue,
    }

    // -----------------------------------------------------------------------------
    // Structs

    #[test]
    fn point_properties() {
        assert_eq!(decode::<Point>(r#"{"x": 1, "y": 2}"#), Ok(Point { x: 1, y: 2 }));
        assert_eq!(decode::<Point>(r#"{"y": 2, "x": 1}"#), Ok(Point { x: 1, y: 2 }));
        assert_eq!(decode::<Point>(r#"{"x": 1}"#), Ok(Point { x: 1, y: 0 }));
        assert_eq!(decode::<Point>("{}"), Ok(Point { x: 0, y: 0 }));
    }

    #[test]
    fn last_duplicate_wins() {
        assert_eq!(
            decode::<Point>(r#"{"x": 1, "y": 2, "x": 5}"#),
            Ok(Point { x: 5, y: 2 })
        );
    }

    #[test]
    fn unknown_properties_are_skipped_whole() {
        assert_eq!(
            decode::<Point>(r#"{"x": 1, "z": {"a": [1, {"y": 9}], "b": null}, "y": 2, "w": []}"#),
            Ok(Point { x: 1, y: 2 })
        );
    }

    #[test]
    fn object_ends_at_end_of_stream() {
        let mut tape = TokenTape::new(vec![
            Token::StartObject,
            Token::PropertyName("x".into()),
            Token::Number(Number::PosInt(1)),
        ]);
        assert_eq!(Point::decode(&mut tape), Ok(Point { x: 1, y: 0 }));
        assert!(tape.is_exhausted());
    }

    #[test]
    fn property_name_without_value_is_an_error() {
        let truncated = |name: &str| {
            TokenTape::new(vec![
                Token::StartObject,
                Token::PropertyName("x".into()),
                Token::Number(Number::PosInt(1)),
                Token::PropertyName(name.into()),
            ])
        };

        assert_eq!(
            Point::decode(&mut truncated("z")),
            Err(FormatError::UnexpectedToken {
                expected: "a value",
                found: TokenKind::EndOfStream,
            })
        );
        assert_eq!(
            Point::decode(&mut truncated("y")),
            Err(FormatError::UnexpectedToken {
                expected: "a number",
                found: TokenKind::EndOfStream,
            })
        );
    }

    #[test]
    fn stray_tokens_in_the_body_are_ignored() {
        let mut tape = TokenTape::new(vec![
            Token::StartObject,
            Token::from("stray"),
            Token::PropertyName("y".into()),
            Token::Number(Number::NegInt(-3)),
            Token::EndObject,
            Token::Null,
        ]);
        assert_eq!(Point::decode(&mut tape), Ok(Point { x: 0, y: -3 }));
        assert_eq!(tape.next_token(), Ok(Some(Token::Null)));
    }

    #[test]
    fn struct_errors() {
        assert_eq!(
            decode::<Point>("[1, 2]"),
            Err(FormatError::ExpectedStartObject {
                type_path: "ss_decode::decode::tests::Point",
                found: TokenKind::StartArray,
            })
        );
        assert_eq!(
            Point::decode(&mut TokenTape::new(Vec::new())),
            Err(FormatError::ExpectedStartObject {
                type_path: "ss_decode::decode::tests::Point",
                found: TokenKind::EndOfStream,
            })
        );
        assert_eq!(
            decode::<Point>(r#"{"x": "one"}"#),
            Err(FormatError::UnexpectedToken {
                expected: "a number",
                found: TokenKind::String,
            })
        );
    }

    // -----------------------------------------------------------------------------
    // Enums

    #[test]
    fn labels_ignore_case() {
        assert_eq!(decode::<Color>(r#""green""#), Ok(Color::Green));
        assert_eq!(decode::<Color>(r#""GREEN""#), Ok(Color::Green));
        assert_eq!(decode::<Color>(r#""Blue""#), Ok(Color::Blue));
        assert_eq!(decode::<Color>(r#""rEd""#), Ok(Color::Red));
    }

    #[test]
    fn enum_errors() {
        assert_eq!(
            decode::<Color>(r#""purple""#),
            Err(FormatError::UnknownLabel {
                type_path: "ss_decode::decode::tests::Color",
                label: "purple".into(),
            })
        );
        assert_eq!(
            decode::<Color>("5"),
            Err(FormatError::ExpectedString {
                type_path: "ss_decode::decode::tests::Color",
                found: TokenKind::Number,
            })
        );
    }

    // -----------------------------------------------------------------------------
    // Naming and field options

    fn seven() -> u32 {
        7
    }

    fn read_percent(reader: &mut dyn TokenRead) -> Result<u8, FormatError> {
        let ratio = f64::decode(reader)?;
        Ok((ratio * 100.0) as u8)
    }

    #[derive(Decode, Debug, PartialEq)]
    #[decode(rename_all = "camelCase")]
    struct Track {
        track_title: String,
        #[decode(rename = "BPM")]
        beats_per_minute: u16,
        #[decode(skip, default = seven)]
        play_count: u32,
        #[decode(with = read_percent)]
        volume: u8,
        r#type: Option<String>,
    }

    #[derive(Decode, Debug, PartialEq)]
    #[decode(rename_all = "SCREAMING_SNAKE_CASE")]
    enum Mode {
        DarkMode,
        #[decode(rename = "light")]
        LightMode,
    }

    #[test]
    fn renamed_members() {
        let track = decode::<Track>(
            r#"{"trackTitle": "Intro", "BPM": 120, "playCount": 99, "volume": 0.5, "type": "live"}"#,
        );
        assert_eq!(
            track,
            Ok(Track {
                track_title: "Intro".into(),
                beats_per_minute: 120,
                play_count: 7,
                volume: 50,
                r#type: Some("live".into()),
            })
        );

        // Rust names are not accepted once renamed.
        let track = decode::<Track>(r#"{"track_title": "Intro", "beats_per_minute": 1}"#).unwrap();
        assert_eq!(track.track_title, "");
        assert_eq!(track.beats_per_minute, 0);
        assert_eq!(track.play_count, 7);
    }

    #[test]
    fn renamed_labels() {
        assert_eq!(decode::<Mode>(r#""DARK_MODE""#), Ok(Mode::DarkMode));
        assert_eq!(decode::<Mode>(r#""dark_mode""#), Ok(Mode::DarkMode));
        assert_eq!(decode::<Mode>(r#""LIGHT""#), Ok(Mode::LightMode));
        assert!(decode::<Mode>(r#""LightMode""#).is_err());
    }

    // -----------------------------------------------------------------------------
    // Constructors

    #[derive(Decode, Debug, PartialEq)]
    #[decode(constructor = Self::new(name))]
    #[decode(constructor = Self::with_id(name, id))]
    struct User {
        name: String,
        id: u64,
        origin: &'static str,
    }

    impl User {
        fn new(name: String) -> Self {
            Self {
                name,
                id: 0,
                origin: "new",
            }
        }

        fn with_id(name: String, id: u64) -> Self {
            Self {
                name,
                id,
                origin: "with_id",
            }
        }
    }

    #[derive(Decode, Debug, PartialEq)]
    #[decode(constructor = Pair::swapped(1, 0))]
    struct Pair(u8, #[decode(rename = "second")] u8);

    impl Pair {
        fn swapped(second: u8, first: u8) -> Self {
            Self(first, second)
        }
    }

    #[derive(Decode, Debug, PartialEq)]
    struct Wrapper(String, bool);

    #[test]
    fn most_parameters_wins() {
        assert_eq!(
            decode::<User>(r#"{"id": 7, "name": "ann", "origin": "ignored"}"#),
            Ok(User::with_id("ann".into(), 7))
        );
        assert_eq!(decode::<User>("{}"), Ok(User::with_id(String::new(), 0)));
        assert_eq!(User::new("bob".into()).origin, "new");
    }

    #[test]
    fn tuple_structs() {
        assert_eq!(decode::<Pair>(r#"{"second": 2, "0": 1}"#), Ok(Pair(1, 2)));
        assert_eq!(
            decode::<Wrapper>(r#"{"1": true, "0": "w"}"#),
            Ok(Wrapper("w".into(), true))
        );
    }

    // -----------------------------------------------------------------------------
    // Nesting

    #[derive(Decode, Debug, PartialEq)]
    struct Scene {
        origin: Box<Point>,
        points: Vec<Point>,
        tint: Option<Color>,
        label: Option<String>,
    }

    #[test]
    fn nested_values() {
        let scene = decode::<Scene>(
            r#"{
                "points": [{"x": 1}, {"y": 2}],
                "tint": "blue",
                "origin": {"x": 3, "y": 4},
                "label": null
            }"#,
        );
        assert_eq!(
            scene,
            Ok(Scene {
                origin: Box::new(Point { x: 3, y: 4 }),
                points: vec![Point { x: 1, y: 0 }, Point { x: 0, y: 2 }],
                tint: Some(Color::Blue),
                label: None,
            })
        );

        assert_eq!(
            decode::<Scene>(r#"{"tint": "mauve"}"#),
            Err(FormatError::UnknownLabel {
                type_path: "ss_decode::decode::tests::Color",
                label: "mauve".into(),
            })
        );
    }

    #[derive(Decode, Debug, PartialEq)]
    struct Node {
        value: i32,
        next: Option<Box<Self>>,
        #[decode(default = Self::unnamed, with = Self::read_name)]
        name: String,
    }

    impl Node {
        fn unnamed() -> String {
            "unnamed".into()
        }

        fn read_name(reader: &mut dyn TokenRead) -> Result<String, FormatError> {
            String::decode(reader).map(|name| name.to_uppercase())
        }
    }

    #[test]
    fn self_referential_types() {
        let node = decode::<Node>(r#"{"value": 1, "next": {"value": 2, "name": "tail", "next": null}}"#);
        assert_eq!(
            node,
            Ok(Node {
                value: 1,
                name: "unnamed".into(),
                next: Some(Box::new(Node {
                    value: 2,
                    next: None,
                    name: "TAIL".into(),
                })),
            })
        );
    }

    // -----------------------------------------------------------------------------
    // Artifacts

    #[test]
    fn decoder_singleton() {
        assert!(core::ptr::eq(PointDecoder::instance(), PointDecoder::instance()));
        assert!(core::ptr::eq(<Point as Decodable>::decoder(), PointDecoder::instance()));
        assert_eq!(size_of::<PointDecoder>(), 0);

        let mut tape = tape(r#"{"x": 4}"#);
        let point = <PointDecoder as Decoder<Point>>::decode(PointDecoder::instance(), &mut tape);
        assert_eq!(point, Ok(Point { x: 4, y: 0 }));
    }

    #[test]
    fn static_type_info() {
        let info = Track::type_info();
        assert_eq!(info.ident(), "Track");
        assert_eq!(info.type_path(), "ss_decode::decode::tests::Track");

        let fields = info.fields().unwrap();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[1].wire_key(), Some("BPM"));
        assert_eq!(fields[2].name(), "play_count");
        assert!(!fields[2].is_rendered());
        assert_eq!(fields[4].name(), "type");

        let info = Mode::type_info();
        assert_eq!(info.labels().unwrap()[0].wire_label(), "DARK_MODE");
        assert!(info.label("Light").is_some());
    }

    #[test]
    fn trailing_tokens() {
        let tokens = vec![Token::from("red"), Token::Null];
        assert_eq!(
            from_tape::<Color>(TokenTape::new(tokens)),
            Err(FormatError::TrailingTokens { count: 1 })
        );
    }
}
