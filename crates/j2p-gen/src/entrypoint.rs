use j2p_ir::Class;

/// Synthesize the trailing `if __name__ == "__main__":` dispatch block
/// (spec §4.4, §8 Scenario F): one `sys.argv[1] ==` clause per top-level
/// class declaring `main`, omitted entirely if none do.
pub(crate) fn emit_entrypoint(classes: &[Class]) -> Vec<String> {
    let mains: Vec<&Class> = classes.iter().filter(|c| c.declares_main()).collect();
    if mains.is_empty() {
        return Vec::new();
    }

    let mut out = vec![
        "if __name__ == \"__main__\":".to_string(),
        "    import sys".to_string(),
        "    assert len(sys.argv) > 1".to_string(),
    ];
    for (i, class) in mains.iter().enumerate() {
        let kw = if i == 0 { "if" } else { "elif" };
        out.push(format!("    {kw} sys.argv[1] == \"{}\":", class.name));
        out.push(format!("        {}.main(sys.argv[2:])", class.name));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_main_declared_omits_entrypoint() {
        assert!(emit_entrypoint(&[Class::new("Ex")]).is_empty());
    }

    #[test]
    fn scenario_f_single_main() {
        let h = j2p_util::diagnostic::Handler::new(j2p_util::diagnostic::Mode::Fatal);
        let mut class = Class::new("App");
        class
            .add_method(
                j2p_ir::Method {
                    modifiers: j2p_ir::Modifiers::new(true, true),
                    name: "main".into(),
                    parameter_names: vec![],
                    body: vec![],
                },
                &h,
                1,
            )
            .unwrap();
        assert_eq!(
            emit_entrypoint(&[class]),
            vec![
                "if __name__ == \"__main__\":",
                "    import sys",
                "    assert len(sys.argv) > 1",
                "    if sys.argv[1] == \"App\":",
                "        App.main(sys.argv[2:])",
            ]
        );
    }
}
