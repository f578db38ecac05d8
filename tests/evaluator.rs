use mylang::run;
use pretty_assertions::assert_eq;

fn assert_evaluates(source: &str, expected: &str) {
    match run(source) {
        Ok(result) => assert_eq!(result, expected, "source: {source}"),
        Err(error) => panic!("{source:?} failed with: {error}"),
    }
}

fn assert_fails(source: &str, expected: &str) {
    match run(source) {
        Ok(result) => panic!("{source:?} should have failed but produced {result}"),
        Err(error) => assert_eq!(error.to_string(), expected, "source: {source}"),
    }
}

#[test]
fn arithmetic_precedence() {
    assert_evaluates("1 + 2 * 3", "7");
    assert_evaluates("(1 + 2) * 3", "9");
    assert_evaluates("-5", "-5");
    assert_evaluates("10 - 4 - 3", "3");
    assert_evaluates("2 * -3 + 1", "-5");
    assert_evaluates("7 % 3", "1");
    assert_evaluates("-7 % 3", "-1");
    assert_evaluates("1 / 4", "0.25");
    assert_evaluates("0.1 + 0.2", "0.30000000000000004");
}

#[test]
fn number_rendering() {
    assert_evaluates("1000000", "1000000");
    assert_evaluates("-0", "0");
    assert_evaluates("5 % 0", "NaN");
    assert_evaluates("3.50", "3.5");
}

#[test]
fn comparisons() {
    assert_evaluates("1 < 2", "true");
    assert_evaluates("2 <= 2", "true");
    assert_evaluates("3 > 4", "false");
    assert_evaluates("4 >= 5", "false");
    assert_evaluates("1 + 1 == 2", "true");
    assert_evaluates("1 != 1", "false");
}

#[test]
fn equality_across_types() {
    assert_evaluates(r#"5 == "5""#, "false");
    assert_evaluates(r#"5 != "5""#, "true");
    assert_evaluates("null == null", "true");
    assert_evaluates("null == false", "false");
    assert_evaluates("null != 0", "true");
    assert_evaluates("true == true", "true");
    assert_evaluates("true != false", "true");
    assert_evaluates(r#""a" == "a""#, "true");
    assert_evaluates(r#""a" != "b""#, "true");
    assert_evaluates("[] == 1", "false");
}

#[test]
fn string_concatenation() {
    assert_evaluates(r#""foo" + "bar""#, "foobar");
    assert_evaluates(r#"let name = "world"; "hello, " + name"#, "hello, world");
}

#[test]
fn truthiness() {
    assert_evaluates("!0", "true");
    assert_evaluates("!''", "true");
    assert_evaluates("!null", "true");
    assert_evaluates("!false", "true");
    assert_evaluates("![]", "true");
    assert_evaluates("!{}", "false");
    assert_evaluates("![0]", "false");
    assert_evaluates("!'a'", "false");
    assert_evaluates("!-1", "false");
    assert_evaluates("!print", "false");
    assert_evaluates("!fn() {}", "false");
}

#[test]
fn logical_operators_return_booleans() {
    assert_evaluates("1 && 'a'", "true");
    assert_evaluates("0 || null", "false");
    assert_evaluates("[] || 'x'", "true");
    assert_evaluates("true && 0", "false");
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_evaluates("let n = 0; \
                      fn bump() { n = n + 1; return true; } \
                      false && bump(); \
                      true || bump(); \
                      n",
                     "2");
}

#[test]
fn declarations_and_assignment() {
    assert_evaluates("let x = 10; x = 20; x;", "20");
    assert_evaluates("let x = 1;", "null");
    assert_evaluates("const c = 1;", "null");
    assert_evaluates("fn f() {}", "null");
    assert_evaluates("let a = 0; let b = 0; a = b = 3; a + b", "6");
    assert_evaluates("let x = 1; x = 5", "5");
    assert_evaluates("", "null");
}

#[test]
fn inner_scopes_shadow_and_assign_outward() {
    assert_evaluates("let x = 1; if (true) { let x = 2; x; }", "2");
    assert_evaluates("let x = 1; if (true) { let x = 2; } x", "1");
    assert_evaluates("let x = 1; if (true) { x = 5; } x", "5");
    assert_fails("if (true) { let hidden = 1; } hidden", "Undefined variable: hidden");
}

#[test]
fn const_bindings() {
    assert_fails("const x = 10; x = 20;", "Cannot reassign constant: x");
    assert_fails("const x = 10; if (true) { x = 20; }", "Cannot reassign constant: x");
    assert_evaluates("const x = 1; if (true) { let x = 2; x = 3; x }", "3");
    assert_evaluates("const greeting = 'hi'; greeting + '!'", "hi!");
}

#[test]
fn redefinition_in_one_scope_fails() {
    assert_fails("let x = 1; let x = 2;", "Variable already defined: x");
    assert_fails("let x = 1; const x = 2;", "Variable already defined: x");
    assert_fails("fn f() {} fn f() {}", "Variable already defined: f");
    assert_fails("let len = 1;", "Variable already defined: len");
    assert_evaluates("fn f() { let len = 3; return len; } f()", "3");
}

#[test]
fn parameters_can_be_redeclared_in_the_body() {
    assert_evaluates("fn f(x) { let x = x * 2; return x; } f(4)", "8");
}

#[test]
fn closures_capture_their_scope() {
    assert_evaluates("fn makeAdder(x) { return fn(y) { return x + y; }; } \
                      let add5 = makeAdder(5); \
                      add5(3)",
                     "8");
    assert_evaluates("fn counter() { let n = 0; return fn() { n = n + 1; return n; }; } \
                      let c = counter(); \
                      c(); c(); c()",
                     "3");
    assert_evaluates("fn counter() { let n = 0; return fn() { n = n + 1; return n; }; } \
                      let a = counter(); \
                      let b = counter(); \
                      a(); a(); \
                      b()",
                     "1");
}

#[test]
fn named_local_functions_outlive_their_block() {
    assert_evaluates("fn counter() { \
                        let n = 0; \
                        fn next() { n = n + 1; return n; } \
                        return next; \
                      } \
                      let c = counter(); \
                      c(); c(); c()",
                     "3");
    assert_evaluates("let kept = []; \
                      for (let i = 0; i < 3; i = i + 1) { fn get() { return i; } kept = push(kept, get); } \
                      len(kept) * 10 + kept[0]()",
                     "33");
}

#[test]
fn scoping_is_lexical() {
    assert_evaluates("let x = 'global'; \
                      fn show() { return x; } \
                      fn test() { let x = 'local'; return show(); } \
                      test()",
                     "global");
}

#[test]
fn globals_defined_later_are_visible_to_earlier_functions() {
    assert_evaluates("fn get() { return later; } let later = 9; get()", "9");
}

#[test]
fn recursion() {
    assert_evaluates("fn fact(n) { if (n <= 1) { return 1; } return n * fact(n - 1); } fact(5)",
                     "120");
    assert_evaluates("fn fib(n) { if (n < 2) { return n; } return fib(n - 1) + fib(n - 2); } \
                      fib(10)",
                     "55");
}

#[test]
fn implicit_and_explicit_returns() {
    assert_evaluates("fn f() { 42 } f()", "42");
    assert_evaluates("fn g() { let x = 1; } g()", "null");
    assert_evaluates("fn h() { return; } h()", "null");
    assert_evaluates("fn early() { return 1; 2 } early()", "1");
    assert_evaluates("return 5; 6", "5");
    assert_evaluates("1; return; 2", "null");
}

#[test]
fn if_statements() {
    assert_evaluates("if (false) { 1 }", "null");
    assert_evaluates("if (0) { 1 } else { 2 }", "2");
    assert_evaluates("fn grade(s) { \
                        if (s >= 90) { return 'A'; } \
                        else if (s >= 80) { return 'B'; } \
                        else { return 'C'; } \
                      } \
                      grade(85) + grade(95) + grade(10)",
                     "BAC");
}

#[test]
fn while_loops() {
    assert_evaluates("let sum = 0; let i = 0; while (i < 5) { sum = sum + i; i = i + 1; } sum",
                     "10");
    assert_evaluates("while (false) { 1; }", "null");
    assert_evaluates("let i = 0; while (i < 3) { i = i + 1; i * 10; }", "30");
}

#[test]
fn for_loops() {
    assert_evaluates("let sum = 0; for (let i = 0; i < 5; i = i + 1) { sum = sum + i; } sum",
                     "10");
    assert_evaluates("for (let i = 0; i < 3; i = i + 1) { i * 10; }", "20");
    assert_evaluates("for (let i = 0; i < 0; i = i + 1) { 1; }", "null");
    assert_evaluates("let i = 0; for (i = 10; i < 13; i = i + 1) { } i", "13");
    assert_fails("for (let i = 0; i < 1; i = i + 1) { } i", "Undefined variable: i");
}

#[test]
fn loop_bodies_get_a_fresh_scope_each_iteration() {
    assert_evaluates("let fs = []; \
                      for (let i = 0; i < 3; i = i + 1) { let j = i; fs = push(fs, fn() { j }); } \
                      fs[0]() + fs[2]()",
                     "2");
}

#[test]
fn return_escapes_loops() {
    let find = "fn find(xs, t) { \
                  for (let i = 0; i < len(xs); i = i + 1) { if (xs[i] == t) { return i; } } \
                  return -1; \
                } ";
    assert_evaluates(&format!("{find} find([5, 6, 7], 7)"), "2");
    assert_evaluates(&format!("{find} find([5, 6, 7], 8)"), "-1");
    assert_evaluates("fn f() { let i = 0; while (true) { i = i + 1; if (i == 4) { return i; } } } f()",
                     "4");
    assert_evaluates("fn f() { for (;;) { return 'out'; } } f()", "out");
}

#[test]
fn function_values() {
    assert_evaluates("fn(x) { x * 2 }(21)", "42");
    assert_evaluates("let sq = fn(x) { return x * x; }; sq(7)", "49");
    assert_evaluates("fn twice(f, x) { return f(f(x)); } twice(fn(n) { n + 3 }, 1)", "7");
    assert_evaluates("fn map(xs, f) { \
                        let out = []; \
                        for (let i = 0; i < len(xs); i = i + 1) { out = push(out, f(xs[i])); } \
                        return out; \
                      } \
                      map([1, 2, 3], fn(x) { x * x })",
                     "[1, 4, 9]");
}

#[test]
fn indexing_arrays_and_strings() {
    assert_evaluates("let arr = [1, 2, 3]; arr[0]", "1");
    assert_evaluates("let arr = [1, 2, 3]; arr[10];", "null");
    assert_evaluates("[1, 2, 3][-1]", "null");
    assert_evaluates("[1, 2, 3][1.9]", "2");
    assert_evaluates("'hello'[1]", "e");
    assert_evaluates("'hello'[5]", "null");
    assert_evaluates("'héllo'[1]", "é");
}

#[test]
fn objects() {
    assert_evaluates("let obj = { x: 10 }; obj[\"x\"]", "10");
    assert_evaluates("let obj = { x: 10 }; obj.x", "10");
    assert_evaluates("let obj = { x: 10 }; obj.missing", "null");
    assert_evaluates("let obj = { x: 10 }; obj[\"missing\"]", "null");
    assert_evaluates("let o = { inner: { v: [1, 2] } }; o.inner.v[1]", "2");
    assert_evaluates("{ a: 1, a: 2 }.a", "2");
    assert_evaluates("let o = { f: fn(x) { x + 1 } }; o.f(1)", "2");
}

#[test]
fn value_rendering() {
    assert_evaluates("{ a: 1, b: 'x', c: [true, null] }", "{ a: 1, b: x, c: [true, null] }");
    assert_evaluates("{ z: 1, a: 2 }", "{ z: 1, a: 2 }");
    assert_evaluates("{}", "{}");
    assert_evaluates("[]", "[]");
    assert_evaluates("[[1, 2], 'three', {}]", "[[1, 2], three, {}]");
    assert_evaluates("fn add(a, b) { a + b } add", "<function(a, b)>");
    assert_evaluates("fn() {}", "<function()>");
    assert_evaluates("len", "<builtin function>");
    assert_evaluates("null", "null");
    assert_evaluates("'quoted'", "quoted");
}
