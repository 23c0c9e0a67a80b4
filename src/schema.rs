diesel::table! {
    customers (id) {
        id -> Integer,
        name -> Text,
        email -> Text,
        address -> Nullable<Text>,
    }
}

diesel::table! {
    order_lines (order_id, product_id) {
        order_id -> Integer,
        product_id -> Integer,
        quantity -> Integer,
        price -> Double,
    }
}

diesel::table! {
    orders (id) {
        id -> Integer,
        customer_id -> Integer,
        order_date -> Date,
        total -> Double,
    }
}

diesel::table! {
    products (id) {
        id -> Integer,
        name -> Text,
        description -> Nullable<Text>,
        price -> Double,
        stock -> Integer,
    }
}

diesel::joinable!(order_lines -> orders (order_id));
diesel::joinable!(order_lines -> products (product_id));
diesel::joinable!(orders -> customers (customer_id));

diesel::allow_tables_to_appear_in_same_query!(customers, order_lines, orders, products,);
