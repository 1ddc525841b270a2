mod nested {
    #[derive(::map_keys::Enumerable)]
    pub struct Settings {
        pub name: String,
        pub region: String,
    }
}

fn main() {
    let settings = nested::Settings {
        name: "edge".to_owned(),
        region: "eu".to_owned(),
    };
    let mapped = map_keys::map_keys(&settings, |key, value, _| format!("{key}={value}"));
    assert_eq!(mapped.keys().collect::<Vec<_>>(), ["name=edge", "region=eu"]);
}
