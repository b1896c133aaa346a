/// Pseudo-segment placed between the path and the method in function names.
const METHOD_JOINER: &str = "by";

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

pub fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// `/alert/detail/{id}` + `get` -> `alertDetailIdByGet`
pub fn service_name(path: &str, method: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.trim_start_matches('{').trim_end_matches('}'))
        .chain([METHOD_JOINER, method])
        .enumerate()
        .map(|(index, segment)| {
            if index == 0 {
                segment.to_string()
            } else {
                capitalize(segment)
            }
        })
        .collect()
}

/// Output file name for a tag: its description without whitespace, first letter lowered.
pub fn file_name(description: &str, extension: &str) -> String {
    let compact: String = description.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{}.{}", lower_first(&compact), extension)
}

/// `/pet/{petId}` -> `/pet/${petId}`
pub fn url_template(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if segment.contains('{') {
                format!("${segment}")
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join("/")
}

#[test]
fn test_service_name() {
    assert_eq!(service_name("/alert/detail/{id}", "get"), "alertDetailIdByGet");
    assert_eq!(service_name("/alert/list", "get"), "alertListByGet");
    assert_eq!(service_name("/pet/{petId}/uploadImage", "post"), "petPetIdUploadImageByPost");
    assert_eq!(service_name("/", "get"), "byGet");
}

#[test]
fn test_file_name() {
    assert_eq!(file_name("Pet Store", "ts"), "petStore.ts");
    assert_eq!(file_name("Everything about your Pets", "ts"), "everythingaboutyourPets.ts");
    assert_eq!(file_name(" Access\tto orders ", "ts"), "accesstoorders.ts");
}

#[test]
fn test_case_helpers() {
    assert_eq!(capitalize("pet"), "Pet");
    assert_eq!(lower_first("PetStore"), "petStore");
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_url_template() {
    assert_eq!(url_template("/pet/{petId}"), "/pet/${petId}");
    assert_eq!(
        url_template("/store/{storeId}/order/{orderId}"),
        "/store/${storeId}/order/${orderId}"
    );
    assert_eq!(url_template("/pet/findByStatus"), "/pet/findByStatus");
}
