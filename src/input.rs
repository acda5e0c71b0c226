use crate::atm::inventory::Inventory;
use crate::atm::request::{self, Request};
use crate::atm::{Amount, NoteCount, RequestId};

use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, PartialEq)]
pub enum Error {
    Csv(String),    // CSV is malformed
    Format(String), // Data format is incorrect
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<<RequestRecord as TryInto<Request>>::Error> for Error {
    fn from(err: <RequestRecord as TryInto<Request>>::Error) -> Self {
        Self::Format(err.to_string())
    }
}

// A bad row must not take the stream down: the machine keeps serving the
// next customer. Malformed rows become errors on their own channel while
// the well-formed rows keep flowing.
pub fn parse(
    input_stream: (impl std::io::Read + Send + 'static),
) -> (Receiver<Request>, Receiver<Error>) {
    let (request_tx, request_rx): (Sender<Request>, Receiver<Request>) = mpsc::channel();
    let (error_tx, error_rx): (Sender<Error>, Receiver<Error>) = mpsc::channel();

    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    // Moving to a new thread so the machine can start serving requests
    // immediately.
    std::thread::spawn(move || {
        for record in reader.deserialize::<RequestRecord>() {
            match convert(record) {
                Ok(request) => request_tx.send(request).unwrap(), // Would only fail if the rx is disconnected, which should not happen here.
                Err(err) => error_tx.send(err).unwrap(), // Would only fail if the rx is disconnected, which should not happen here.
            };
        }
    });

    (request_rx, error_rx)
}

// Convert from a csv deserialise result into a request result.
fn convert(record: Result<RequestRecord, csv::Error>) -> Result<Request, Error> {
    Ok(record?.try_into()?)
}

// An intermediate record type, because the domain `Request` can't be
// deserialised directly: a withdrawal row carries an amount, a refill row
// carries note counts, and csv+serde can't express that split cleanly.
// The record type also keeps the domain type free of any assumption about
// how requests happen to be formatted on the wire.
#[derive(Debug, Deserialize)]
pub struct RequestRecord {
    #[serde(rename = "type")]
    request_type: RequestRecordType,

    #[serde(rename = "tx")]
    request_id: RequestId,

    amount: Option<Amount>,

    fifties: Option<NoteCount>,
    twenties: Option<NoteCount>,
    tens: Option<NoteCount>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestRecordType {
    Withdrawal,
    Refill,
}

impl TryFrom<RequestRecord> for Request {
    type Error = &'static str;
    fn try_from(record: RequestRecord) -> Result<Self, Self::Error> {
        let request_id = record.request_id;
        let request_type = match record.request_type {
            RequestRecordType::Withdrawal => request::Type::Withdrawal(match record.amount {
                Some(amount) => amount,
                None => return Err("missing amount for withdrawal"),
            }),
            RequestRecordType::Refill => {
                // A refill row names the delivered notes instead of an amount.
                match (record.fifties, record.twenties, record.tens) {
                    (Some(fifties), Some(twenties), Some(tens)) => {
                        request::Type::Refill(Inventory::new(fifties, twenties, tens))
                    }
                    _ => return Err("missing note counts for refill"),
                }
            }
        };

        Ok(Self::new(request_type, request_id))
    }
}

#[test]
// Parsing well-formed data should produce one Request per row.
fn test_parse_ok() {
    let data = r#"type,tx,amount,fifties,twenties,tens
withdrawal,1,230,,,
withdrawal,2,60,,,
refill,3,,10,20,30
withdrawal,4,50,,,"#;
    let reader = std::io::Cursor::new(data);
    let (requests, errors) = parse(reader);

    assert_eq!(4, requests.iter().count());
    assert_eq!(0, errors.iter().count());
}

#[test]
fn test_parse_ok_with_whitespace() {
    let data = r#"type,   tx,  amount,fifties,twenties,tens
withdrawal, 1, 230,,,
withdrawal , 2 , 60 ,  ,  ,
    refill ,3,, 10 , 20 , 30
        withdrawal          ,4,50,,,"#;
    let reader = std::io::Cursor::new(data);
    let (requests, errors) = parse(reader);

    assert_eq!(4, requests.iter().count());
    assert_eq!(0, errors.iter().count());
}

#[test]
// Incorrectly formatted rows should each produce an Error.
fn test_parse_invalid_format() {
    for (data, err_contains) in vec![
        (
            r#"type,tx,amount,fifties,twenties,tens
some_unknown_request_type,1,230,,,"#,
            "unknown variant `some_unknown_request_type`",
        ),
        (
            r#"type,tx,amount,fifties,twenties,tens
withdrawal,,230,,,"#, // missing tx
            "cannot parse integer from empty string",
        ),
        (
            r#"type,tx,amount,fifties,twenties,tens
withdrawal,1,230"#,
            "found record with 3 fields, but the previous record has 6 fields",
        ),
        (
            r#"type,tx,amount,fifties,twenties,tens
withdrawal,1,230,,,,,"#,
            "found record with 8 fields, but the previous record has 6 fields",
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let (requests, errors) = parse(reader);

        assert_eq!(0, requests.iter().count());

        let errs: Vec<Error> = errors.iter().collect();
        assert_eq!(1, errs.len());

        match &errs[0] {
            Error::Csv(msg) => assert!(msg.contains(err_contains), "{:?}", msg),
            _ => panic!("unexpected error"),
        }
    }
}

#[test]
// Withdrawals without an amount, and refills without note counts, should
// fail to convert into a Request.
fn test_parse_invalid_data() {
    for (data, want_err) in vec![
        (
            r#"type,tx,amount,fifties,twenties,tens
withdrawal,1,,,,"#,
            Error::Format("missing amount for withdrawal".to_string()),
        ),
        (
            r#"type,tx,amount,fifties,twenties,tens
refill,1,,10,,10"#,
            Error::Format("missing note counts for refill".to_string()),
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let (requests, errors) = parse(reader);

        assert_eq!(0, requests.iter().count());

        let errs: Vec<Error> = errors.iter().collect();
        assert_eq!(vec![want_err], errs);
    }
}

#[test]
// Well-formed records should convert into the matching Request.
fn test_request_record_into_request_well_formed() {
    let test_cases: Vec<(RequestRecord, Request)> = vec![
        (
            RequestRecord {
                request_type: RequestRecordType::Withdrawal,
                request_id: 5,
                amount: Some(230),
                fifties: None,
                twenties: None,
                tens: None,
            },
            Request::new(request::Type::Withdrawal(230), 5),
        ),
        (
            RequestRecord {
                request_type: RequestRecordType::Refill,
                request_id: 6,
                amount: None,
                fifties: Some(10),
                twenties: Some(20),
                tens: Some(30),
            },
            Request::new(request::Type::Refill(Inventory::new(10, 20, 30)), 6),
        ),
    ];

    for (record, request) in test_cases {
        assert_eq!(request, record.try_into().unwrap());
    }
}

#[test]
// Malformed records should return an Err.
fn test_request_record_into_request_invalid_data() {
    let record = RequestRecord {
        request_type: RequestRecordType::Withdrawal,
        request_id: 2,
        amount: None,
        fifties: None,
        twenties: None,
        tens: None,
    };

    let got = Request::try_from(record);
    assert_eq!(Err("missing amount for withdrawal"), got);
}
