//! Line codec for the boat data file.
//!
//! Each record is one line of five comma-separated fields:
//!
//! ```text
//! <name>,<length>,<slip|land|trailor|storage>,<placement info>,<amount owed>
//! ```
//!
//! There is no header row and no quoting, so a comma can never appear inside
//! a field. Decoding is lenient about numbers (anything unparseable reads as
//! zero) and about missing trailing fields, but a record must have a name.

use crate::core::{BoatRecord, PlacementPayload, PlacementType};
use crate::utils::error::{MarinaError, Result};
use crate::utils::lenient::lenient_f64;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use std::io::{Read, Write};

pub const FIELD_COUNT: usize = 5;

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All);
    builder
}

/// Decodes a single record line such as `Alpha,20.0,slip,5,100.00`.
pub fn decode_line(line: &str) -> Result<BoatRecord> {
    let mut reader = reader_builder().from_reader(line.as_bytes());
    match reader.records().next() {
        Some(row) => decode_row(&row?),
        None => Err(MarinaError::ParseError {
            line: line.to_string(),
            reason: "line is empty".to_string(),
        }),
    }
}

/// Decodes one already-split row. Fields past the fifth are ignored.
pub fn decode_row(row: &StringRecord) -> Result<BoatRecord> {
    let field = |index: usize| row.get(index).unwrap_or("");
    let line = || row.iter().collect::<Vec<_>>().join(",");

    let name = field(0);
    if name.is_empty() {
        return Err(MarinaError::ParseError {
            line: line(),
            reason: "boat name is missing".to_string(),
        });
    }
    if row.len() < FIELD_COUNT {
        tracing::debug!(
            "Record '{}' has {} of {} fields, defaulting the rest",
            name,
            row.len(),
            FIELD_COUNT
        );
    }

    let length = lenient_f64(field(1));
    let placement = PlacementType::parse(field(2));
    let payload = PlacementPayload::parse(placement, field(3));
    let amount_owed = lenient_f64(field(4));

    BoatRecord::new(name, length, payload, amount_owed).map_err(|e| match e {
        e @ MarinaError::InvalidField { .. } => MarinaError::ParseError {
            line: line(),
            reason: e.to_string(),
        },
        other => other,
    })
}

/// Reads every non-blank line of `reader` as a record.
///
/// Rows are yielded independently so a caller can skip a bad line and keep going.
pub fn read_records<R: Read>(reader: R) -> impl Iterator<Item = Result<BoatRecord>> {
    reader_builder()
        .from_reader(reader)
        .into_records()
        .map(|row| decode_row(&row?))
}

pub fn encode_fields(record: &BoatRecord) -> [String; FIELD_COUNT] {
    [
        record.name().to_string(),
        format!("{:.2}", record.length),
        record.placement().to_string(),
        record.payload.format(),
        format!("{:.2}", record.amount_owed),
    ]
}

/// Encodes a record as one line, without the trailing newline.
pub fn encode_record(record: &BoatRecord) -> String {
    encode_fields(record).join(",")
}

/// Writes records one per line, in the order given.
pub fn write_records<'a, W, I>(writer: W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a BoatRecord>,
{
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in records {
        writer.write_record(&encode_fields(record))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{MAX_NAME_LENGTH, MAX_TRAILER_TAG_LENGTH};

    fn record(name: &str, length: f64, payload: PlacementPayload, owed: f64) -> BoatRecord {
        BoatRecord::new(name, length, payload, owed).unwrap()
    }

    #[test]
    fn test_decode_slip_line() {
        let boat = decode_line("Alpha,20.0,slip,5,100.00").unwrap();
        assert_eq!(boat.name(), "Alpha");
        assert_eq!(boat.length, 20.0);
        assert_eq!(boat.payload, PlacementPayload::Slip { number: 5 });
        assert_eq!(boat.amount_owed, 100.0);
    }

    #[test]
    fn test_decode_each_placement() {
        assert_eq!(
            decode_line("Beta,30.0,land,B,50.00").unwrap().payload,
            PlacementPayload::Land { bay: 'B' }
        );
        assert_eq!(
            decode_line("Gamma,10.0,storage,1,0.00").unwrap().payload,
            PlacementPayload::Storage { space: 1 }
        );
        assert_eq!(
            decode_line("Delta,22.5,TRAILOR,ABC123,0").unwrap().payload,
            PlacementPayload::Trailor {
                tag: "ABC123".to_string()
            }
        );
    }

    #[test]
    fn test_decode_is_lenient_with_numbers() {
        let boat = decode_line("Sloppy,long,slip,seven,lots").unwrap();
        assert_eq!(boat.length, 0.0);
        assert_eq!(boat.payload, PlacementPayload::Slip { number: 0 });
        assert_eq!(boat.amount_owed, 0.0);
    }

    #[test]
    fn test_decode_defaults_missing_fields() {
        let boat = decode_line("Stub,12.00").unwrap();
        assert_eq!(boat.length, 12.0);
        assert_eq!(boat.placement(), PlacementType::NoPlace);
        assert_eq!(boat.payload, PlacementPayload::NoPlace);
        assert_eq!(boat.amount_owed, 0.0);
    }

    #[test]
    fn test_decode_trims_fields_and_line_ending() {
        let boat = decode_line("  Sea Breeze , 28.00 , land , C , 12.50\r\n").unwrap();
        assert_eq!(boat.name(), "Sea Breeze");
        assert_eq!(boat.payload, PlacementPayload::Land { bay: 'C' });
        assert_eq!(boat.amount_owed, 12.5);
    }

    #[test]
    fn test_decode_rejects_missing_name() {
        assert!(matches!(
            decode_line(",20.0,slip,5,1.00"),
            Err(MarinaError::ParseError { .. })
        ));
        assert!(matches!(
            decode_line(""),
            Err(MarinaError::ParseError { .. })
        ));
    }

    #[test]
    fn test_encode_record_formats_two_decimals() {
        let boat = record("Dock", 40.0, PlacementPayload::Slip { number: 7 }, 123.45);
        assert_eq!(encode_record(&boat), "Dock,40.00,slip,7,123.45");

        let none = record("Drifter", 15.5, PlacementPayload::NoPlace, 0.0);
        assert_eq!(encode_record(&none), "Drifter,15.50,no_place,N/A,0.00");
    }

    #[test]
    fn test_round_trip_for_every_placement() {
        let boats = vec![
            record("Alpha", 20.0, PlacementPayload::Slip { number: 5 }, 100.0),
            record("Beta", 30.25, PlacementPayload::Land { bay: 'B' }, 50.5),
            record(
                "Gamma",
                18.0,
                PlacementPayload::Trailor {
                    tag: "TX9".to_string(),
                },
                0.0,
            ),
            record("Delta", 42.75, PlacementPayload::Storage { space: 12 }, 999.99),
        ];

        for boat in boats {
            assert_eq!(decode_line(&encode_record(&boat)).unwrap(), boat);
        }
    }

    #[test]
    fn test_round_trip_at_field_limits() {
        let boats = vec![
            record(
                &"N".repeat(MAX_NAME_LENGTH),
                20.0,
                PlacementPayload::Slip { number: 1 },
                5.0,
            ),
            record(
                "Tagged",
                18.0,
                PlacementPayload::trailor(&"T".repeat(MAX_TRAILER_TAG_LENGTH)).unwrap(),
                0.0,
            ),
            record("  Padded Name  ", 12.5, PlacementPayload::land('Z').unwrap(), 0.0),
            record("Paid Off", 33.0, PlacementPayload::Storage { space: 0 }, 0.0),
            record("Negative Slip", 1.0, PlacementPayload::Slip { number: -4 }, 0.01),
        ];

        for boat in boats {
            let line = encode_record(&boat);
            assert_eq!(decode_line(&line).unwrap(), boat, "line: {}", line);
        }
    }

    #[test]
    fn test_round_trip_keeps_one_line_per_record() {
        let boats = vec![
            record("Sea Breeze", 20.0, PlacementPayload::Slip { number: 1 }, 5.0),
            record("Tide", 15.0, PlacementPayload::trailor("AB CD").unwrap(), 2.0),
        ];

        let mut buffer = Vec::new();
        write_records(&mut buffer, &boats).unwrap();
        let decoded: Vec<BoatRecord> = read_records(buffer.as_slice())
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(decoded, boats);
    }

    #[test]
    fn test_decode_rejects_negative_length_and_balance() {
        match decode_line("Alpha,-20.0,slip,5,0.00") {
            Err(MarinaError::ParseError { line, .. }) => {
                assert_eq!(line, "Alpha,-20.0,slip,5,0.00")
            }
            other => panic!("expected ParseError, got {:?}", other),
        }
        assert!(matches!(
            decode_line("Alpha,20.0,slip,5,-1.00"),
            Err(MarinaError::ParseError { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_control_characters_in_tag() {
        assert!(matches!(
            decode_line("Tow,20.0,trailor,AB\u{7}CD,1.00"),
            Err(MarinaError::ParseError { .. })
        ));
    }

    #[test]
    fn test_write_then_read_records() {
        let boats = vec![
            record("Alpha", 20.0, PlacementPayload::Slip { number: 5 }, 100.0),
            record("Beta", 30.0, PlacementPayload::Land { bay: 'B' }, 50.0),
        ];

        let mut buffer = Vec::new();
        write_records(&mut buffer, &boats).unwrap();
        let text = String::from_utf8(buffer.clone()).unwrap();
        assert_eq!(
            text,
            "Alpha,20.00,slip,5,100.00\nBeta,30.00,land,B,50.00\n"
        );

        let decoded: Vec<BoatRecord> = read_records(buffer.as_slice())
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(decoded, boats);
    }

    #[test]
    fn test_read_records_skips_blank_lines() {
        let data = "Alpha,20.00,slip,5,100.00\n\nBeta,30.00,land,B,50.00\n";
        let decoded: Vec<_> = read_records(data.as_bytes()).collect();
        assert_eq!(decoded.len(), 2);
        assert!(decoded.iter().all(|r| r.is_ok()));
    }
}
