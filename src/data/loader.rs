// loader.rs
use crate::data::models::{RawListing, REQUIRED_COLUMNS};
use crate::data::LoadError;
use crate::domain::table::ListingTable;
use log::{debug, info};
use reqwest::blocking::Client;
use std::io::Read;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("rent_dashboard/", env!("CARGO_PKG_VERSION"));

/// Where the dataset comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    Http { url: String, timeout: Duration },
    File(PathBuf),
}

impl DataSource {
    /// Fetches the raw payload. A single attempt; failures are not retried.
    pub fn fetch(&self) -> Result<String, LoadError> {
        match self {
            DataSource::Http { url, timeout } => fetch_http(url, *timeout),
            DataSource::File(path) => {
                std::fs::read_to_string(path).map_err(|e| {
                    LoadError::Io(format!("Failed to read {}: {e}", path.display()))
                })
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Http { url, .. } => url.clone(),
            DataSource::File(path) => path.display().to_string(),
        }
    }
}

fn fetch_http(url: &str, timeout: Duration) -> Result<String, LoadError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let resp = client
        .get(url)
        .send()
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    resp.text().map_err(|e| LoadError::Network(e.to_string()))
}

/// Parses a CSV payload into the listing table.
///
/// The header is checked for every column the dashboard reads before any
/// record is touched. Rows without a rent, or whose rent falls outside the
/// price bands (which includes everything above the ceiling), are dropped.
pub fn parse_listings<R: Read>(payload: R) -> Result<ListingTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(payload);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(LoadError::MissingColumn(missing.to_string()));
    }

    let mut read = 0usize;
    let mut rows = Vec::new();

    for record in reader.deserialize::<RawListing>() {
        read += 1;
        if let Some(listing) = record?.into_listing() {
            rows.push(listing);
        }
    }

    debug!("Parsed {read} records, kept {}", rows.len());
    Ok(ListingTable::new(rows))
}

/// Fetches and parses the dataset.
pub fn load(source: &DataSource) -> Result<ListingTable, LoadError> {
    let start = Instant::now();
    info!("Loading dataset from {}", source.describe());

    let payload = source.fetch()?;
    let table = parse_listings(payload.as_bytes())?;

    info!(
        "Dataset ready: {} listings in {:?}",
        table.len(),
        start.elapsed()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::PriceCategory;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;

    const HEADER: &str = "regio1,totalRent,livingSpace,balcony,hasKitchen,lift,garden,cellar,yearConstructed\n";

    fn parse(body: &str) -> Result<ListingTable, LoadError> {
        parse_listings(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn drops_rows_above_the_ceiling_and_without_rent() {
        let table = parse(
            "Berlin,750,50,True,False,False,False,True,1990\n\
             Berlin,3000.5,90,True,True,True,False,True,2001\n\
             Bayern,,45,False,False,False,False,False,\n\
             Bayern,0,45,False,False,False,False,False,\n\
             Bayern,3000,120,True,True,True,True,True,2015\n",
        )
        .unwrap();

        let view = table.view();
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|l| l.total_rent <= 3000.0));
        assert_eq!(view[0].price_category, PriceCategory::Economy);
        assert_eq!(view[1].price_category, PriceCategory::Premium);
    }

    #[test]
    fn missing_cells_become_none() {
        let table = parse("NA,420,,,1,0,,NA,\n").unwrap();

        let listing = table.view()[0];
        assert_eq!(listing.region, None);
        assert_eq!(listing.living_space, None);
        assert_eq!(listing.amenities.balcony, None);
        assert_eq!(listing.amenities.has_kitchen, Some(true));
        assert_eq!(listing.amenities.lift, Some(false));
        assert_eq!(listing.amenities.cellar, None);
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let payload = "regio1,totalRent,livingSpace,balcony,hasKitchen,lift,garden\n\
                       Berlin,750,50,True,False,False,False\n";

        match parse_listings(payload.as_bytes()) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "cellar"),
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn bad_cells_are_parse_errors() {
        let err = parse("Berlin,cheap,50,True,False,False,False,True,1990\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)), "got {err:?}");

        let err = parse("Berlin,700,50,sometimes,False,False,False,True,1990\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn ragged_records_are_parse_errors() {
        let err = parse("Berlin,700,50\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn file_source_reports_io_errors() {
        let source = DataSource::File(PathBuf::from("/definitely/not/here.csv"));
        assert!(matches!(source.fetch(), Err(LoadError::Io(_))));
    }

    /// Answers a single HTTP request on a local port with `response`.
    fn serve_once(response: String) -> DataSource {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            // read the whole request head before answering
            let mut head = Vec::new();
            let mut buf = [0u8; 512];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => head.extend_from_slice(&buf[..n]),
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
        });

        DataSource::Http {
            url: format!("http://{addr}/immo_data.csv"),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn http_error_status_is_a_status_failure() {
        let source = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                .to_string(),
        );

        match load(&source) {
            Err(LoadError::Status(code)) => assert_eq!(code, 503),
            other => panic!("expected a status failure, got {other:?}"),
        }
    }

    #[test]
    fn http_source_loads_the_csv() {
        let body = format!("{HEADER}Berlin,400,40,True,False,False,False,True,1965\n");
        let source = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ));

        let table = load(&source).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.view()[0].region.as_deref(), Some("Berlin"));
    }

    #[test]
    fn unreachable_host_is_a_network_failure() {
        // grab a free port, then close it again
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let source = DataSource::Http {
            url: format!("http://{addr}/immo_data.csv"),
            timeout: Duration::from_secs(5),
        };

        assert!(matches!(load(&source), Err(LoadError::Network(_))));
    }
}
