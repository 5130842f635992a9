use serde::{Deserialize, Serialize};
use serde_hstore::{
    from_str, hstore, parse, parse_with_options, stringify, stringify_with_options, to_string,
    to_value, HstoreOptions, Number, Value,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
}

#[test]
fn test_simple_stringify_and_parse() {
    let data = hstore!({
        "a": 1,
        "b": "2",
        "c": "foobar",
        "d": "\"",
        "e": "'",
        "f": "",
        "g": null
    });

    let encoded = stringify(&data);
    assert_eq!(
        encoded,
        r#""a"=>1,"b"=>"2","c"=>"foobar","d"=>"\"","e"=>"'","f"=>"","g"=>NULL"#
    );

    let decoded = parse(&encoded).unwrap();
    assert_eq!(decoded.get("g"), Some(&Value::Null));
    assert_eq!(decoded, data);
}

#[test]
fn test_character_escape() {
    let data = hstore!({
        "\"foo": "foo\"",
        "=>bar": "bar=>",
        "{foo": "foo}",
        "[bar": "bar]"
    });

    let encoded = stringify(&data);
    assert_eq!(
        encoded,
        r#""\"foo"=>"foo\"","=>bar"=>"bar=>","{foo"=>"foo}","[bar"=>"bar]""#
    );

    let decoded = parse(&encoded).unwrap();
    let decoded = decoded.as_map().unwrap();
    let data = data.as_map().unwrap();
    assert_eq!(decoded.len(), data.len());
    for (key, value) in decoded {
        assert_eq!(data.get(key), Some(value), "mismatch for key {:?}", key);
    }
}

#[test]
fn test_postgresql_expression() {
    let data = hstore!({ "a": 1, "b": "foobar", "c": "\"", "d": "'" });
    let options = HstoreOptions::new().with_return_postgresql_expression(true);

    assert_eq!(
        stringify_with_options(&data, options),
        r#"'"a"=>1,"b"=>"foobar","c"=>"\"","d"=>"''"'::hstore"#
    );
}

#[test]
fn test_boolean_as_integer() {
    let data = hstore!({ "a": true, "b": false });

    let encoded = stringify(&data);
    assert_eq!(encoded, r#""a"=>t,"b"=>f"#);

    let decoded = parse(&encoded).unwrap();
    assert_eq!(decoded.get("a"), Some(&Value::Bool(true)));
    assert_eq!(decoded.get("b"), Some(&Value::Bool(false)));

    let options = HstoreOptions::new().with_boolean_as_integer(true);
    assert_eq!(stringify_with_options(&data, options), r#""a"=>1,"b"=>0"#);
}

#[test]
fn test_numeric_check() {
    let encoded = r#""a"=>"1","b"=>2"#;

    let decoded = parse(encoded).unwrap();
    assert_eq!(decoded.get("a"), Some(&Value::from("1")));
    assert_eq!(decoded.get("b"), Some(&Value::from(2)));

    let options = HstoreOptions::new().with_numeric_check(true);
    let decoded = parse_with_options(encoded, options).unwrap();
    assert_eq!(decoded.get("a"), Some(&Value::from(1)));
}

#[test]
fn test_nested_stringify_and_parse() {
    let data = hstore!({
        "a": { "b": 1, "c": "2" },
        "d": { "e": "foo", "f": "bar" },
        "g": 5
    });

    let encoded = stringify(&data);
    assert_eq!(
        encoded,
        r#""a"=>{"b"=>1,"c"=>"2"},"d"=>{"e"=>"foo","f"=>"bar"},"g"=>5"#
    );

    let decoded = parse(&encoded).unwrap();
    let a = decoded.get("a").unwrap();
    assert_eq!(a.get("b"), Some(&Value::Number(Number::Integer(1))));
    assert_eq!(a.get("c"), Some(&Value::from("2")));
    assert_eq!(decoded.get("g"), Some(&Value::from(5)));
}

#[test]
fn test_array_elements() {
    let data = hstore!([1, 2, 3, "foo", "bar"]);
    let encoded = stringify(&data);
    assert_eq!(encoded, r#"1,2,3,"foo","bar""#);

    let decoded = parse(&encoded).unwrap();
    assert_eq!(decoded.as_array().map(Vec::len), Some(5));
    assert_eq!(decoded, data);

    let data = hstore!({ "a": [1, 2, 3], "b": ["foo", "bar"] });
    assert_eq!(stringify(&data), r#""a"=>{1,2,3},"b"=>{"foo","bar"}"#);
}

#[test]
fn test_array_square_brackets() {
    let data = hstore!({ "a": [1, 2, 3], "b": ["foo", "bar"] });
    let options = HstoreOptions::new().with_array_square_brackets(true);

    let encoded = stringify_with_options(&data, options);
    assert_eq!(encoded, r#""a"=>[1,2,3],"b"=>["foo","bar"]"#);

    let decoded = parse(&encoded).unwrap();
    assert_eq!(decoded.get("a").and_then(Value::as_array).map(Vec::len), Some(3));
    assert_eq!(decoded.get("b").and_then(Value::as_array).map(Vec::len), Some(2));
}

#[test]
fn test_root_hash_decorated() {
    let data = hstore!({ "a": [1, 2, 3], "b": ["foo", "bar"] });

    let options = HstoreOptions::decorated();
    let encoded = stringify_with_options(&data, options);
    assert_eq!(encoded, r#"{"a"=>{1,2,3},"b"=>{"foo","bar"}}"#);
    assert_eq!(parse_with_options(&encoded, options).unwrap(), data);

    let options = HstoreOptions::decorated().with_array_square_brackets(true);
    let encoded = stringify_with_options(&data, options);
    assert_eq!(encoded, r#"{"a"=>[1,2,3],"b"=>["foo","bar"]}"#);
    assert_eq!(parse_with_options(&encoded, options).unwrap(), data);

    let options = HstoreOptions::new().with_array_square_brackets(true);
    let encoded = stringify_with_options(&data, options);
    assert_eq!(encoded, r#""a"=>[1,2,3],"b"=>["foo","bar"]"#);
    assert_eq!(parse(&encoded).unwrap(), data);
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let text = to_string(&user).unwrap();
    assert_eq!(
        text,
        r#""id"=>123,"name"=>"Alice","active"=>t,"tags"=>{"admin","developer"}"#
    );

    let user_back: User = from_str(&text).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_empty_vectors() {
    let user = User {
        id: 1,
        name: "Bob".to_string(),
        active: false,
        tags: vec![],
    };

    let text = to_string(&user).unwrap();
    assert_eq!(text, r#""id"=>1,"name"=>"Bob","active"=>f,"tags"=>{}"#);
    let user_back: User = from_str(&text).unwrap();
    assert_eq!(user, user_back);

    let empty: Vec<u32> = vec![];
    let text = to_string(&empty).unwrap();
    assert_eq!(text, "");
    assert_eq!(from_str::<Vec<u32>>(&text).unwrap(), empty);
}

#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.5,
                quantity: 1,
            },
        ],
        total: 109.48,
    };

    let text = to_string(&order).unwrap();
    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_whole_floats_read_back_into_float_fields() {
    let product = Product {
        sku: "X".to_string(),
        price: 3.0,
        quantity: 1,
    };

    let text = to_string(&product).unwrap();
    assert_eq!(text, r#""sku"=>"X","price"=>3,"quantity"=>1"#);
    let back: Product = from_str(&text).unwrap();
    assert_eq!(back, product);
}

#[test]
fn test_optional_fields() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Row {
        name: String,
        nickname: Option<String>,
        age: Option<u8>,
    }

    let row = Row {
        name: "Bob".to_string(),
        nickname: None,
        age: Some(40),
    };

    let text = to_string(&row).unwrap();
    assert_eq!(text, r#""name"=>"Bob","nickname"=>NULL,"age"=>40"#);
    assert_eq!(from_str::<Row>(&text).unwrap(), row);
}

#[test]
fn test_to_value_matches_macro() {
    let user = User {
        id: 1,
        name: "A".to_string(),
        active: false,
        tags: vec!["x".to_string()],
    };

    let value = to_value(&user).unwrap();
    assert_eq!(
        value,
        hstore!({ "id": 1, "name": "A", "active": false, "tags": ["x"] })
    );
}

#[test]
fn test_value_agrees_with_json() {
    let text = r#""a"=>1,"b"=>{"c"=>t,"d"=>NULL},"e"=>{1.5,"x"}"#;
    let value = parse(text).unwrap();

    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "a": 1, "b": { "c": true, "d": null }, "e": [1.5, "x"] })
    );

    let from_json: Value = serde_json::from_value(json).unwrap();
    assert_eq!(from_json, value);
}

#[test]
fn test_display_uses_default_options() {
    let value = hstore!({ "k": [true] });
    assert_eq!(value.to_string(), r#""k"=>{t}"#);
}
