use reqtrack::pattern::to_pattern;
use reqtrack::state::form::{FormState, SubmitOutcome};
use reqtrack::state::list::ListState;
use reqtrack::state::record::{HttpMethod, Record};
use reqtrack::state::store::RecordStore;
use reqtrack::transfer::json;

fn record(url: &str, method: HttpMethod) -> Record {
    Record::new(url, method, "{}", "{}")
}

#[test]
fn appends_keep_call_order() {
    let mut store = RecordStore::new();
    let mut form = FormState::default();
    for url in ["/a", "/b", "/c"] {
        form.type_url(url);
        form.submit(&mut store).unwrap();
    }
    let urls: Vec<&str> = store.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, [r"\/a", r"\/b", r"\/c"]);
}

#[test]
fn edit_index_one_of_three() {
    let a = record("A", HttpMethod::Get);
    let b = record("B", HttpMethod::Post);
    let c = record("C", HttpMethod::Put);
    let mut store = RecordStore::from(vec![a.clone(), b, c.clone()]);
    let mut form = FormState::default();

    form.begin_edit(1);
    form.sync(&store);
    form.method = HttpMethod::Delete;
    form.response.set("{\"deleted\": true}");

    assert_eq!(form.submit(&mut store), Ok(SubmitOutcome::Updated(1)));
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(0), Some(&a));
    assert_eq!(
        store.get(1),
        Some(&Record::new("B", HttpMethod::Delete, "{}", "{\"deleted\": true}"))
    );
    assert_eq!(store.get(2), Some(&c));
    assert_eq!(form.edit_index(), None);
}

#[test]
fn json_round_trip_restores_an_equal_store() {
    let store = RecordStore::from(vec![
        record(&to_pattern("https://api.example.com/v2/users/123"), HttpMethod::Get),
        Record::new("x", HttpMethod::Post, "{\n  \"name\": \"Ada\"\n}", ""),
    ]);

    let text = json::to_json(store.as_slice()).unwrap();
    let mut restored = RecordStore::new();
    restored.replace_all(json::parse_records(&text).unwrap());

    assert_eq!(restored.as_slice(), store.as_slice());
}

#[test]
fn importing_an_empty_array_empties_the_store() {
    let mut store = RecordStore::from(vec![record("a", HttpMethod::Get)]);
    let mut list = ListState::default();
    list.toggle(0);

    store.replace_all(json::parse_records("[]").unwrap());
    list.reset();

    assert!(store.is_empty());
    assert_eq!(list.open(), None);
}

#[test]
fn disclosure_is_independent_of_edit_session() {
    let store = RecordStore::from(vec![record("a", HttpMethod::Get), record("b", HttpMethod::Get)]);
    let mut form = FormState::default();
    let mut list = ListState::default();

    list.toggle(0);
    form.begin_edit(1);
    form.sync(&store);

    assert_eq!(list.open(), Some(0));
    assert_eq!(form.edit_index(), Some(1));
}
