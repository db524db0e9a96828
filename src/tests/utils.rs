use crate::data::{DataSource, DatasetCache};
use crate::router::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A small slice of the listings dataset, with the extra columns the real
/// export carries.
pub const FIXTURE_CSV: &str = "\
regio1,serviceCharge,totalRent,livingSpace,balcony,hasKitchen,lift,garden,cellar,yearConstructed
Berlin,120,400,40,True,False,False,False,True,1965
Berlin,180,1200,60,False,True,True,False,True,2005
Berlin,250,2600,110,True,True,True,True,False,2018
Bayern,200,1400,70,True,True,False,True,True,1999
Bayern,150,900,55,False,False,False,False,True,1978
Hamburg,300,2200,85,True,True,True,False,False,2010
Sachsen,90,450,58,False,False,False,True,True,1930
Sachsen,110,520,64,True,False,False,False,True,1995
Sachsen,,3500,160,True,True,True,True,True,2019
Baden_Württemberg,190,1100,72,True,True,False,True,True,1988
";

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A CSV file under the temp dir, removed again when dropped.
pub struct TempCsv {
    path: PathBuf,
}

impl TempCsv {
    pub fn new(body: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "rent_dashboard_test_{}_{}_{}.csv",
            std::process::id(),
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::write(&path, body).expect("Failed to write fixture CSV");
        TempCsv { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempCsv {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// App state backed by a file source holding `body`. Keep the returned file
/// alive for as long as the state is used.
pub fn init_test_state(body: &str) -> (AppState, TempCsv) {
    let csv = TempCsv::new(body);
    let source = DataSource::File(csv.path().to_path_buf());
    (AppState::new(DatasetCache::new(source)), csv)
}

#[test]
fn temp_csv_is_removed_on_drop() {
    let csv = TempCsv::new("regio1\n");
    let path = csv.path().to_path_buf();
    assert!(path.exists());

    drop(csv);
    assert!(!path.exists());
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
