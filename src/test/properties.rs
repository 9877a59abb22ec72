use serde_json::json;

use crate::trait_::Properties;

pub(crate) fn properties() -> Properties {
    let mut map = Properties::new();
    map.insert("name".to_string(), json!("greenwich"));
    map.insert("amenity".to_string(), json!("arena"));
    map
}
