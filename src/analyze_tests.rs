#[cfg(test)]
mod tests {
    use crate::analyze::{analyze_markup, FunctionInfo, ParseResult};

    fn assert_functions(result: &ParseResult, expected: &[(&str, u32)]) {
        assert_eq!(
            result.functions.len(),
            expected.len(),
            "functions: {:?}",
            result.functions
        );
        for (name, arg_count) in expected {
            let info = result
                .functions
                .iter()
                .find(|f| f.name == *name)
                .unwrap_or_else(|| panic!("missing function {}: {:?}", name, result.functions));
            assert_eq!(info.arg_count, *arg_count, "arity of {}", name);
            assert_eq!(info.arg_types.len(), *arg_count as usize);
            assert!(info.arg_types.iter().all(|t| t == "any"));
        }
    }

    fn assert_variables(result: &ParseResult, expected: &[&str]) {
        let mut got: Vec<&str> = result.variables.iter().map(String::as_str).collect();
        let mut want: Vec<&str> = expected.to_vec();
        got.sort_unstable();
        want.sort_unstable();
        assert_eq!(got, want);
    }

    #[test]
    fn test_counter_markup() {
        let result = analyze_markup(
            r#"
            <div>
                <h2>Count: {count}</h2>
                <button onClick={() => updateCount(count + 1)}>Increment</button>
                <button onClick={() => updateCount(count - 1)}>Decrement</button>
            </div>
            "#,
        );
        assert_functions(&result, &[("updateCount", 1)]);
        assert_variables(&result, &["count"]);
    }

    #[test]
    fn test_todo_list_markup() {
        let result = analyze_markup(
            r#"
            <div>
                <input
                    type="text"
                    value={newTodo}
                    onChange={(e) => updateNewTodo(e.target.value)}
                    placeholder="Enter a new todo"
                />
                <button onClick={() => addTodo(newTodo)}>Add Todo</button>
                <ul>
                    {todos.map((todo) => (
                        <li key={todo.id}>
                            <span>{todo.text}</span>
                            <button onClick={() => toggleTodo(todo.id)}>Toggle</button>
                            <button onClick={() => deleteTodo(todo.id)}>Delete</button>
                        </li>
                    ))}
                </ul>
            </div>
            "#,
        );
        assert_functions(
            &result,
            &[
                ("updateNewTodo", 1),
                ("addTodo", 1),
                ("toggleTodo", 1),
                ("deleteTodo", 1),
            ],
        );
        assert_variables(&result, &["newTodo", "todos", "todo"]);
    }

    #[test]
    fn test_color_picker_markup() {
        let result = analyze_markup(
            r#"
            <div>
                <input
                    type="color"
                    value={color}
                    onChange={(e) => updateColor(e.target.value)}
                />
                <div style={{ width: '100px', height: '100px', backgroundColor: color }}></div>
            </div>
            "#,
        );
        assert_functions(&result, &[("updateColor", 1)]);
        assert_variables(&result, &["color"]);
    }

    #[test]
    fn test_form_markup_handler_without_call_has_arity_zero() {
        let result = analyze_markup(
            r#"
            <form onSubmit={submitForm}>
                <input
                    type="text"
                    value={name}
                    onChange={(e) => updateName(e.target.value)}
                    placeholder="Enter your name"
                />
                <input
                    type="email"
                    value={email}
                    onChange={(e) => updateEmail(e.target.value)}
                    placeholder="Enter your email"
                />
                <button type="submit">Submit</button>
            </form>
            "#,
        );
        assert_functions(&result, &[("submitForm", 0), ("updateName", 1), ("updateEmail", 1)]);
        assert_variables(&result, &["name", "email"]);

        let submit = result.functions.iter().find(|f| f.name == "submitForm").unwrap();
        assert!(submit.arg_types.is_empty());
    }

    #[test]
    fn test_image_gallery_markup_indexed_access() {
        let result = analyze_markup(
            r#"
            <div>
                <img src={images[currentIndex]} alt={`Image ${currentIndex + 1}`} />
                <button onClick={() => updateIndex((currentIndex - 1 + images.length) % images.length)}>
                    Previous
                </button>
                <button onClick={() => updateIndex((currentIndex + 1) % images.length)}>
                    Next
                </button>
            </div>
            "#,
        );
        assert_functions(&result, &[("updateIndex", 1)]);
        assert_variables(&result, &["images", "currentIndex"]);
    }

    #[test]
    fn test_arity_is_maximum_across_call_sites() {
        let result = analyze_markup(
            r#"
            <button onClick={() => report(id)}>One</button>
            <button onClick={() => report(id, label)}>Two</button>
            "#,
        );
        assert_functions(&result, &[("report", 2)]);
    }

    #[test]
    fn test_template_literal_slot_contributes_root_identifier() {
        let result = analyze_markup(r#"<span title={`${user.profile}`}>{greet}</span>"#);
        assert_variables(&result, &["user", "greet"]);
    }

    #[test]
    fn test_function_names_excluded_from_variables() {
        // `refresh` is identified as a handler first; the `{refresh}` slot
        // must not re-add it as a variable.
        let result = analyze_markup(r#"<button onClick={refresh}>{refresh}</button>"#);
        assert_functions(&result, &[("refresh", 0)]);
        assert_variables(&result, &[]);
        for info in &result.functions {
            assert!(!result.variables.contains(&info.name));
        }
    }

    #[test]
    fn test_total_on_malformed_input() {
        for garbage in ["", "{{{{", "<div", "=> (", "${", "a[", ");});"] {
            let result = analyze_markup(garbage);
            assert!(result.functions.is_empty());
            assert!(result.variables.is_empty());
        }
    }

    #[test]
    fn test_idempotent() {
        let markup = r#"<div>{items.map((item) => <li>{item.name}</li>)}</div>"#;
        assert_eq!(analyze_markup(markup), analyze_markup(markup));
    }

    #[test]
    fn test_deduplicates_repeated_sightings() {
        let result = analyze_markup(r#"<p>{count}</p><p>{count}</p><p>{count}</p>"#);
        assert_eq!(result.variables, vec!["count".to_string()]);
    }

    #[test]
    fn test_function_info_shape() {
        let result = analyze_markup(r#"<a onClick={() => go(next)}>Go</a>"#);
        assert_eq!(
            result.functions,
            vec![FunctionInfo {
                name: "go".to_string(),
                arg_count: 1,
                arg_types: vec!["any".to_string()],
            }]
        );
    }
}
