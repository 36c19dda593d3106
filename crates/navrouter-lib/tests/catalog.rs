use std::sync::Mutex;

use navrouter_lib::catalog::{build_url, list_all, list_installed};
use navrouter_lib::{
    BuildError, Coordinate, Destination, DestinationKind, NavigationAppId, ProbeError,
    SchemeProbe, StaticProbe,
};

fn app(id: NavigationAppId) -> &'static navrouter_lib::NavigationApp {
    id.descriptor()
}

fn place(latitude: f64, longitude: f64) -> Destination {
    Destination::place(Coordinate::new(latitude, longitude).expect("valid"), None)
}

#[test]
fn coordinate_grammars_match_each_app() {
    let destination = place(45.5017, -73.5673);

    let cases = [
        (
            NavigationAppId::GoogleMaps,
            "comgooglemaps://?daddr=45.5017,-73.5673&directionsmode=driving",
        ),
        (
            NavigationAppId::Waze,
            "waze://?ll=45.5017,-73.5673&navigate=yes",
        ),
        (
            NavigationAppId::Citymapper,
            "citymapper://directions?endcoord=45.5017,-73.5673",
        ),
    ];

    for (id, expected) in cases {
        let url = build_url(app(id), &destination).expect("coordinate url");
        assert_eq!(url.as_str(), expected, "grammar for {id}");
    }
}

#[test]
fn coordinates_are_not_rounded() {
    let destination = place(51.50072919999999, -0.12462950000000001);
    let url = build_url(app(NavigationAppId::Waze), &destination).unwrap();
    assert_eq!(
        url.as_str(),
        format!(
            "waze://?ll={},{}&navigate=yes",
            51.50072919999999_f64, -0.12462950000000001_f64
        )
    );
    assert!(url.as_str().contains("51.5007291999"));
}

#[test]
fn negative_zero_longitude_is_written_as_zero() {
    let url = build_url(app(NavigationAppId::Citymapper), &place(0.0000001, -0.0)).unwrap();
    assert_eq!(url.as_str(), "citymapper://directions?endcoord=0.0000001,0");
}

#[test]
fn google_maps_address_uses_plus_for_spaces() {
    let url = build_url(
        app(NavigationAppId::GoogleMaps),
        &Destination::address("123 Main St"),
    )
    .unwrap();
    assert_eq!(url.as_str(), "comgooglemaps://?q=123+Main+St");
}

#[test]
fn waze_address_escapes_spaces() {
    let url = build_url(app(NavigationAppId::Waze), &Destination::address("123 Main St")).unwrap();
    assert_eq!(url.as_str(), "waze://?q=123%20Main%20St");
    assert!(!url.as_str().contains('+'));
}

#[test]
fn address_families_disagree_on_spaces() {
    let destination = Destination::address("221B Baker Street, London");
    let google = build_url(app(NavigationAppId::GoogleMaps), &destination).unwrap();
    let waze = build_url(app(NavigationAppId::Waze), &destination).unwrap();

    assert_eq!(google.as_str(), "comgooglemaps://?q=221B+Baker+Street%2C+London");
    assert_eq!(waze.as_str(), "waze://?q=221B%20Baker%20Street%2C%20London");
}

#[test]
fn citymapper_rejects_addresses() {
    let err = build_url(
        app(NavigationAppId::Citymapper),
        &Destination::address("Trafalgar Square"),
    )
    .expect_err("citymapper has no address grammar");
    assert_eq!(
        err,
        BuildError::UnsupportedDestinationKind {
            app: NavigationAppId::Citymapper,
            kind: DestinationKind::Address,
        }
    );
}

#[test]
fn installed_subset_keeps_catalog_order() {
    let probe = StaticProbe::with_apps([NavigationAppId::Citymapper, NavigationAppId::GoogleMaps]);
    let ids: Vec<_> = list_installed(&probe).iter().map(|app| app.id).collect();
    assert_eq!(
        ids,
        vec![NavigationAppId::GoogleMaps, NavigationAppId::Citymapper]
    );
}

#[test]
fn installed_apps_are_matched_by_exact_scheme() {
    let probe = StaticProbe::with_schemes(["waze://", "citymapper"]);
    let ids: Vec<_> = list_installed(&probe).iter().map(|app| app.id).collect();
    assert_eq!(ids, vec![NavigationAppId::Waze]);
}

#[test]
fn nothing_installed_yields_empty_set() {
    assert!(list_installed(&StaticProbe::none()).is_empty());
}

struct CountingProbe {
    calls: Mutex<Vec<String>>,
}

impl SchemeProbe for CountingProbe {
    fn can_open(&self, scheme: &str) -> Result<bool, ProbeError> {
        self.calls.lock().unwrap().push(scheme.to_string());
        if scheme == "waze://" {
            return Err(ProbeError {
                scheme: scheme.to_string(),
                message: "sandbox denied query".to_string(),
            });
        }
        Ok(true)
    }
}

#[test]
fn probe_runs_once_per_entry_and_failures_count_as_missing() {
    let probe = CountingProbe {
        calls: Mutex::new(Vec::new()),
    };

    let ids: Vec<_> = list_installed(&probe).iter().map(|app| app.id).collect();
    assert_eq!(
        ids,
        vec![NavigationAppId::GoogleMaps, NavigationAppId::Citymapper]
    );

    let calls = probe.calls.lock().unwrap().clone();
    let schemes: Vec<_> = list_all().iter().map(|app| app.url_scheme).collect();
    assert_eq!(calls, schemes);
}

#[test]
fn probe_results_are_not_cached() {
    let probe = CountingProbe {
        calls: Mutex::new(Vec::new()),
    };
    list_installed(&probe);
    list_installed(&probe);
    assert_eq!(probe.calls.lock().unwrap().len(), 2 * list_all().len());
}
