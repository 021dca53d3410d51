use super::*;

fn float() -> DataType {
    DataType::named("float")
}

fn method(name: &str) -> MethodModel {
    MethodModel::new(name, DataType::named("void"))
}

fn class(id: &str, name: &str) -> ClassNode {
    ClassNode::new(id, ClassModel::new(name))
}

fn interface(id: &str, name: &str, methods: &[&str]) -> ClassNode {
    let model = methods
        .iter()
        .fold(ClassModel::new(name), |model, m| model.with_method(method(m)));

    ClassNode::new(id, model).interface()
}

fn resolve_err(request: &GenerationRequest) -> SchemaError {
    resolve(request).expect_err("resolution should fail")
}

fn duplicate_signature(err: &SchemaError) -> Option<&str> {
    match err {
        SchemaError::Structural(StructuralError::DuplicateConstructorSignature {
            signature, ..
        }) => Some(signature.as_str()),
        _ => None,
    }
}

//
// inheritance
//

#[test]
fn managed_targets_reject_second_base_class() {
    for target in [Target::Java, Target::CSharp] {
        let request = GenerationRequest::new(target)
            .with_class(class("b1", "BaseA"))
            .with_class(class("b2", "BaseB"))
            .with_class(class("d", "Derived").with_parent("b1").with_parent("b2"));

        let err = resolve_err(&request);
        assert!(matches!(
            err,
            SchemaError::Structural(StructuralError::TooManyBaseClasses { ref class, limit: 1 })
                if class == "Derived"
        ));
    }
}

#[test]
fn native_target_allows_multiple_bases_in_declared_order() {
    let request = GenerationRequest::new(Target::Cpp)
        .with_class(class("b1", "BaseA"))
        .with_class(class("b2", "BaseB"))
        .with_class(interface("i1", "Drawable", &[]))
        .with_class(
            class("d", "Derived")
                .with_parent_access("b2", AccessModifier::Protected)
                .with_parent("i1")
                .with_parent("b1"),
        );

    let model = resolve(&request).unwrap();
    let derived = model.class("d").unwrap();

    let names: Vec<_> = derived.parents.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["BaseB", "Drawable", "BaseA"]);
    assert_eq!(derived.parents[0].access, AccessModifier::Protected);
    assert_eq!(derived.base_classes().count(), 2);
    assert_eq!(derived.interfaces().count(), 1);
}

#[test]
fn interface_may_not_extend_class_on_managed_targets() {
    let request = GenerationRequest::new(Target::CSharp)
        .with_class(class("b", "Base"))
        .with_class(interface("i", "IShape", &[]).with_parent("b"));

    assert!(matches!(
        resolve_err(&request),
        SchemaError::Structural(StructuralError::InterfaceExtendsClass { .. })
    ));

    let native = GenerationRequest {
        language: Target::Cpp,
        ..request
    };
    assert!(resolve(&native).is_ok());
}

#[test]
fn unknown_parent_and_self_parent_are_rejected() {
    let request =
        GenerationRequest::new(Target::Java).with_class(class("a", "A").with_parent("ghost"));
    assert!(matches!(
        resolve_err(&request),
        SchemaError::Reference(ReferenceError::UnknownParent { ref id, .. }) if id == "ghost"
    ));

    let request = GenerationRequest::new(Target::Java).with_class(class("a", "A").with_parent("a"));
    assert!(matches!(
        resolve_err(&request),
        SchemaError::Structural(StructuralError::SelfInheritance { .. })
    ));
}

//
// flattening
//

#[test]
fn flattening_walks_interface_ancestry_once() {
    // Shape implements I1 and I2; I1 extends I2, so I2 is reachable twice.
    let request = GenerationRequest::new(Target::Java)
        .with_class(interface("i2", "Named", &["name"]))
        .with_class(interface("i1", "Drawable", &["draw", "bounds"]).with_parent("i2"))
        .with_class(class("s", "Shape").with_parent("i1").with_parent("i2"));

    let model = resolve(&request).unwrap();
    let shape = model.class("s").unwrap();

    let names: Vec<_> = shape
        .overridden_methods
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, ["draw", "bounds", "name"]);
}

#[test]
fn flattening_skips_non_public_methods_and_interfaces_themselves() {
    let mut helper = method("helper");
    helper.access = AccessModifier::Protected;

    let request = GenerationRequest::new(Target::Cpp)
        .with_class(ClassNode::new(
            "i",
            ClassModel::new("Visitor").with_method(method("visit")).with_method(helper),
        ).interface())
        .with_class(interface("j", "Walker", &["walk"]).with_parent("i"))
        .with_class(class("c", "Concrete").with_parent("j"));

    let model = resolve(&request).unwrap();

    let concrete: Vec<_> = model
        .class("c")
        .unwrap()
        .overridden_methods
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(concrete, ["walk", "visit"]);
    assert!(model.class("j").unwrap().overridden_methods.is_empty());
}

#[test]
fn interface_properties_flatten_only_for_csharp() {
    let build = |target| {
        GenerationRequest::new(target)
            .with_class(
                ClassNode::new(
                    "i",
                    ClassModel::new("IHasId").with_property(PropertyModel::new(
                        "ip",
                        "Id",
                        DataType::named("int"),
                    )),
                )
                .interface(),
            )
            .with_class(class("c", "Entity").with_parent("i"))
    };

    let csharp = resolve(&build(Target::CSharp)).unwrap();
    let entity = csharp.class("c").unwrap();
    assert_eq!(entity.properties.len(), 1);
    assert_eq!(entity.properties[0].origin, PropertyOrigin::Flattened);

    let java = resolve(&build(Target::Java)).unwrap();
    assert!(java.class("c").unwrap().properties.is_empty());
}

//
// friends
//

#[test]
fn friends_resolve_to_names() {
    let request = GenerationRequest::new(Target::Cpp)
        .with_class(ClassNode::new("a", ClassModel::new("Alpha").with_friend("b")))
        .with_class(ClassNode::new("b", ClassModel::new("Beta").with_friend("a")));

    let model = resolve(&request).unwrap();
    assert_eq!(model.class("a").unwrap().friend_classes, ["Beta"]);
    assert_eq!(model.class("b").unwrap().friend_classes, ["Alpha"]);

    let request = GenerationRequest::new(Target::Cpp)
        .with_class(ClassNode::new("a", ClassModel::new("Alpha").with_friend("zzz")));
    assert!(matches!(
        resolve_err(&request),
        SchemaError::Reference(ReferenceError::UnknownFriend { .. })
    ));
}

//
// constructors and destructors
//

fn point(constructors: Vec<ConstructorModel>) -> GenerationRequest {
    let model = constructors.into_iter().fold(
        ClassModel::new("Point")
            .with_property(PropertyModel::new("x", "x", float()))
            .with_property(PropertyModel::new("y", "y", float()))
            .with_property(PropertyModel::new("n", "name", DataType::named("char").with_pointer())),
        ClassModel::with_constructor,
    );

    GenerationRequest::new(Target::Cpp).with_class(ClassNode::new("p", model))
}

#[test]
fn equal_type_sequences_conflict() {
    let request = point(vec![
        ConstructorModel::new("fromX").initializing("x"),
        ConstructorModel::new("fromY").initializing("y"),
    ]);

    let err = resolve_err(&request);
    assert_eq!(duplicate_signature(&err), Some("float"), "got: {err}");
}

#[test]
fn two_default_constructors_conflict() {
    let request = point(vec![ConstructorModel::new("a"), ConstructorModel::new("b")]);

    let err = resolve_err(&request);
    assert_eq!(duplicate_signature(&err), Some(""), "got: {err}");
}

#[test]
fn differing_order_does_not_conflict() {
    let request = point(vec![
        ConstructorModel::new("a").initializing("x").initializing("n"),
        ConstructorModel::new("b").initializing("n").initializing("x"),
    ]);

    let model = resolve(&request).unwrap();
    let signatures: Vec<_> = model
        .class("p")
        .unwrap()
        .constructors
        .iter()
        .map(|c| c.signature.as_str())
        .collect();
    assert_eq!(signatures, ["float, char*", "char*, float"]);
}

#[test]
fn implicit_copy_constructor_is_registered_first() {
    let mut request = point(vec![ConstructorModel {
        is_copy_constructor: true,
        ..ConstructorModel::new("copy")
    }]);
    request.class_nodes[0].class_data.generate_copy_constructor = true;

    let err = resolve_err(&request);
    assert_eq!(duplicate_signature(&err), Some("const Point&"), "got: {err}");
}

#[test]
fn constructor_picks_up_length_fields_of_initialized_owner() {
    let request = GenerationRequest::new(Target::Cpp).with_class(ClassNode::new(
        "b",
        ClassModel::new("Buffer")
            .with_property(PropertyModel::new(
                "d",
                "data",
                DataType::named("int").with_array_pointer("dataLength"),
            ))
            .with_constructor(ConstructorModel::new("make").initializing("d")),
    ));

    let model = resolve(&request).unwrap();
    let buffer = model.class("b").unwrap();
    let constructor = &buffer.constructors[0];

    let names: Vec<_> = buffer.select(&constructor.fields).map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["data", "dataLength"]);
    assert_eq!(constructor.signature, "int*, unsigned int");
}

#[test]
fn destructor_ids_map_to_properties() {
    let request = GenerationRequest::new(Target::Cpp).with_class(ClassNode::new(
        "b",
        ClassModel::new("Buffer")
            .with_property(PropertyModel::new(
                "d",
                "data",
                DataType::named("int").with_array_pointer("dataLength"),
            ))
            .with_destructor(DestructorModel::releasing(["d"])),
    ));

    let model = resolve(&request).unwrap();
    let buffer = model.class("b").unwrap();

    let names: Vec<_> = buffer.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["data", "dataLength"]);
    assert_eq!(buffer.property("dataLength").unwrap().ty.name, "unsigned int");
    assert_eq!(buffer.destructor.as_ref().unwrap().fields, [0]);

    let request = GenerationRequest::new(Target::Cpp).with_class(ClassNode::new(
        "b",
        ClassModel::new("Buffer").with_destructor(DestructorModel::releasing(["nope"])),
    ));
    assert!(matches!(
        resolve_err(&request),
        SchemaError::Reference(ReferenceError::UnknownDeletedField { .. })
    ));
}

#[test]
fn unknown_initialized_field_is_a_reference_error() {
    let request = point(vec![ConstructorModel::new("make").initializing("z")]);

    assert!(matches!(
        resolve_err(&request),
        SchemaError::Reference(ReferenceError::UnknownInitializedField { ref id, .. }) if id == "z"
    ));
}

//
// packages
//

#[test]
fn package_paths_join_from_every_root() {
    let request = GenerationRequest::new(Target::Cpp)
        .with_package(PackageNode::new("r1", "core").with_child("m"))
        .with_package(PackageNode::new("m", "math").with_parent("r1").with_child("v"))
        .with_package(PackageNode::new("r2", "ui"))
        .with_package(PackageNode::new("lost", "orphan").with_parent("m"))
        .with_class(class("v", "Vector3"))
        .with_class(class("w", "Widget").in_package("r2"))
        .with_class(class("f", "Free"));

    let model = resolve(&request).unwrap();

    assert_eq!(model.class("v").unwrap().package_path.as_deref(), Some("core::math"));
    assert_eq!(model.class("w").unwrap().package_path.as_deref(), Some("ui"));
    assert_eq!(model.class("f").unwrap().package_path, None);
    assert_eq!(model.package("m").unwrap().path.as_deref(), Some("core::math"));
    assert_eq!(model.package("lost").unwrap().path, None);

    let java = resolve(&GenerationRequest {
        language: Target::Java,
        ..request
    })
    .unwrap();
    assert_eq!(java.class("v").unwrap().package_path.as_deref(), Some("core.math"));
}

#[test]
fn class_claimed_twice_is_rejected() {
    let request = GenerationRequest::new(Target::Java)
        .with_package(PackageNode::new("a", "alpha").with_child("c"))
        .with_package(PackageNode::new("b", "beta"))
        .with_class(class("c", "Shared").in_package("b"));

    assert!(matches!(
        resolve_err(&request),
        SchemaError::Structural(StructuralError::ClassInMultiplePackages { .. })
    ));
}

#[test]
fn package_reached_twice_is_rejected() {
    let request = GenerationRequest::new(Target::Java)
        .with_package(PackageNode::new("a", "alpha").with_child("s"))
        .with_package(PackageNode::new("b", "beta").with_child("s"))
        .with_package(PackageNode::new("s", "shared").with_parent("a"));

    assert!(matches!(
        resolve_err(&request),
        SchemaError::Structural(StructuralError::PackageRevisited { .. })
    ));
}

#[test]
fn package_references_must_resolve() {
    let request = GenerationRequest::new(Target::Java)
        .with_package(PackageNode::new("a", "alpha").with_child("x"));
    assert!(matches!(
        resolve_err(&request),
        SchemaError::Reference(ReferenceError::UnknownPackageChild { .. })
    ));

    let request = GenerationRequest::new(Target::Java)
        .with_package(PackageNode::new("a", "alpha").with_parent("x"));
    assert!(matches!(
        resolve_err(&request),
        SchemaError::Reference(ReferenceError::UnknownParentPackage { .. })
    ));

    let request = GenerationRequest::new(Target::Java).with_class(class("c", "C").in_package("x"));
    assert!(matches!(
        resolve_err(&request),
        SchemaError::Reference(ReferenceError::UnknownOwningPackage { .. })
    ));
}
