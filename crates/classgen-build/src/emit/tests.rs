use super::*;
use classgen_schema::{node::*, prepare, types::*};

fn emit(request: &GenerationRequest, id: &str) -> String {
    let model = prepare(request).unwrap();
    let emitter = TargetEmitter::new(model.target, &Skeletons::bundled(model.target)).unwrap();

    emitter.emit(model.class(id).unwrap()).unwrap()
}

fn float(id: &str, name: &str) -> PropertyModel {
    PropertyModel::new(id, name, DataType::named("float"))
}

fn buffer(target: Target) -> GenerationRequest {
    GenerationRequest::new(target).with_class(ClassNode::new(
        "b",
        ClassModel::new("Buffer")
            .with_property(
                PropertyModel::new(
                    "d",
                    "data",
                    DataType::named("int").with_array_pointer("dataLength"),
                )
                .with_setter(),
            )
            .with_destructor(DestructorModel::releasing(["d"]))
            .with_copy_machinery(true, true),
    ))
}

#[test]
fn cpp_buffer_gets_destructor_and_copy_machinery() {
    let code = emit(&buffer(Target::Cpp), "b");

    assert!(code.starts_with("class Buffer\n{"), "got:\n{code}");
    assert!(code.contains("    ~Buffer()\n    {\n        delete[] data;\n    }"), "got:\n{code}");
    assert!(
        code.contains("    Buffer(const Buffer& other)\n        : dataLength(other.dataLength)"),
        "got:\n{code}"
    );
    assert!(code.contains("        data = new int[dataLength];"), "got:\n{code}");
    assert!(code.contains("Buffer& operator=(const Buffer& other)"), "got:\n{code}");
    assert!(code.contains("        dataLength = other.dataLength;"), "got:\n{code}");
    assert!(
        code.contains("void setData(int* data, unsigned int dataLength) { this->data = data; this->dataLength = dataLength; }"),
        "got:\n{code}"
    );
    assert!(code.contains("    int* data;"), "got:\n{code}");
    assert!(code.contains("    unsigned int dataLength;"), "got:\n{code}");
    assert!(code.trim_end().ends_with("};"));
}

#[test]
fn managed_targets_spell_arrays_and_skip_memory() {
    let csharp = emit(&buffer(Target::CSharp), "b");
    assert!(csharp.contains("public int[] data;"), "got:\n{csharp}");
    assert!(csharp.contains("public uint dataLength;"), "got:\n{csharp}");
    assert!(csharp.contains("public void SetData(int[] data, uint dataLength)"), "got:\n{csharp}");
    assert!(!csharp.contains("delete"));

    let java = emit(&buffer(Target::Java), "b");
    assert!(java.starts_with("public class Buffer {"), "got:\n{java}");
    assert!(java.contains("public int[] data;"), "got:\n{java}");
    assert!(java.contains("public int dataLength;"), "got:\n{java}");
    assert!(java.contains("this.dataLength = dataLength;"), "got:\n{java}");
}

#[test]
fn vector3_has_three_fields_and_no_destructor_on_every_target() {
    for target in [Target::Cpp, Target::CSharp, Target::Java] {
        let request = GenerationRequest::new(target).with_class(ClassNode::new(
            "v",
            ClassModel::new("Vector3")
                .with_property(float("x", "x"))
                .with_property(float("y", "y"))
                .with_property(float("z", "z"))
                .with_destructor(DestructorModel::default()),
        ));

        let code = emit(&request, "v");
        let fields = code
            .lines()
            .filter(|line| line.trim_end().ends_with(';') && line.contains("float "))
            .count();

        assert_eq!(fields, 3, "{target}:\n{code}");
        assert!(!code.contains('~'), "{target}:\n{code}");
    }
}

#[test]
fn access_partitions_land_in_sections() {
    let request = GenerationRequest::new(Target::Cpp).with_class(ClassNode::new(
        "s",
        ClassModel::new("Secret")
            .with_property(float("a", "open"))
            .with_property(float("b", "guarded").with_access(AccessModifier::Protected))
            .with_property(float("c", "hidden").with_access(AccessModifier::Private).with_getter())
            .with_method(
                MethodModel::new("check", DataType::named("bool"))
                    .with_access(AccessModifier::Private),
            ),
    ));

    let code = emit(&request, "s");
    let public = code.find("public:").unwrap();
    let protected = code.find("protected:").unwrap();
    let private = code.find("private:").unwrap();

    assert!(public < code.find("float open;").unwrap());
    assert!(code.find("float getHidden() const").unwrap() < protected);
    assert!(protected < code.find("float guarded;").unwrap());
    assert!(private < code.find("bool check();").unwrap());
    assert!(private < code.find("float hidden;").unwrap());
}

#[test]
fn interfaces_use_their_own_template() {
    let request = GenerationRequest::new(Target::Cpp)
        .with_class(
            ClassNode::new(
                "i",
                ClassModel::new("Shape")
                    .with_method(MethodModel::new("area", DataType::named("double")))
                    .with_destructor(DestructorModel::default())
                    .with_copy_machinery(true, true),
            )
            .interface(),
        )
        .with_class(
            ClassNode::new("c", ClassModel::new("Circle").with_property(float("r", "radius")))
                .with_parent("i"),
        );

    let shape = emit(&request, "i");
    assert!(shape.contains("virtual double area() = 0;"), "got:\n{shape}");
    assert!(!shape.contains("operator="));
    assert!(!shape.contains("Shape(const Shape& other)"));

    let circle = emit(&request, "c");
    assert!(circle.starts_with("class Circle : public Shape"), "got:\n{circle}");
    assert!(circle.contains("double area() override;"), "got:\n{circle}");
}

#[test]
fn java_splits_extends_and_implements() {
    let request = GenerationRequest::new(Target::Java)
        .with_class(ClassNode::new("b", ClassModel::new("Animal")))
        .with_class(
            ClassNode::new(
                "i",
                ClassModel::new("Pet")
                    .with_method(MethodModel::new("name", DataType::named("String"))),
            )
            .interface(),
        )
        .with_class(ClassNode::new("d", ClassModel::new("Dog")).with_parent("i").with_parent("b"));

    let dog = emit(&request, "d");
    assert!(dog.starts_with("public class Dog extends Animal implements Pet {"), "got:\n{dog}");
    assert!(dog.contains("    @Override\n    public String name() {"), "got:\n{dog}");

    let pet = emit(&request, "i");
    assert!(pet.contains("    String name();"), "got:\n{pet}");
}

#[test]
fn csharp_puts_base_class_first_and_auto_implements_interface_properties() {
    let request = GenerationRequest::new(Target::CSharp)
        .with_class(
            ClassNode::new(
                "i",
                ClassModel::new("IHasId")
                    .with_property(PropertyModel::new("p", "Id", DataType::named("int"))),
            )
            .interface(),
        )
        .with_class(ClassNode::new("b", ClassModel::new("Entity")))
        .with_class(ClassNode::new("u", ClassModel::new("User")).with_parent("i").with_parent("b"));

    let user = emit(&request, "u");
    assert!(user.starts_with("public class User : Entity, IHasId"), "got:\n{user}");
    assert!(user.contains("public int Id { get; set; }"), "got:\n{user}");

    let interface = emit(&request, "i");
    assert!(interface.contains("    int Id { get; set; }"), "got:\n{interface}");
}

#[test]
fn templates_and_friends_are_rendered() {
    let request = GenerationRequest::new(Target::Cpp)
        .with_class(ClassNode::new("k", ClassModel::new("Key")))
        .with_class(ClassNode::new(
            "m",
            ClassModel::new("Map")
                .with_template_parameter("K")
                .with_template_parameter("V")
                .with_friend("k"),
        ));

    let code = emit(&request, "m");
    assert!(code.starts_with("template <typename K, typename V>\nclass Map"), "got:\n{code}");
    assert!(code.contains("    friend class Key;"), "got:\n{code}");
}

#[test]
fn packaged_classes_are_wrapped() {
    let build = |target| {
        GenerationRequest::new(target)
            .with_package(PackageNode::new("r", "geo").with_child("m"))
            .with_package(PackageNode::new("m", "math").with_parent("r").with_child("v"))
            .with_class(ClassNode::new("v", ClassModel::new("Vec2")))
    };

    let cpp = emit(&build(Target::Cpp), "v");
    assert!(cpp.starts_with("namespace geo::math\n{\nclass Vec2"), "got:\n{cpp}");

    let csharp = emit(&build(Target::CSharp), "v");
    assert!(csharp.starts_with("namespace geo.math\n{\npublic class Vec2"), "got:\n{csharp}");

    let java = emit(&build(Target::Java), "v");
    assert!(java.starts_with("package geo.math;\n\npublic class Vec2"), "got:\n{java}");
}

#[test]
fn constructors_bind_parameters_in_order() {
    let request = GenerationRequest::new(Target::Java).with_class(ClassNode::new(
        "p",
        ClassModel::new("Point")
            .with_property(float("x", "x"))
            .with_property(float("y", "y"))
            .with_constructor(
                ConstructorModel::new("make")
                    .initializing("y")
                    .initializing("x"),
            ),
    ));

    let code = emit(&request, "p");
    assert!(
        code.contains("    public Point(float y, float x) {\n        this.y = y;\n        this.x = x;\n    }"),
        "got:\n{code}"
    );
}

#[test]
fn declared_copy_constructor_takes_the_source_instance_on_managed_targets() {
    let mut copy = ConstructorModel::new("copy").initializing("x");
    copy.is_copy_constructor = true;

    let request = |target| {
        GenerationRequest::new(target).with_class(ClassNode::new(
            "p",
            ClassModel::new("Point")
                .with_property(float("x", "x"))
                .with_constructor(ConstructorModel::new("make"))
                .with_constructor(copy.clone()),
        ))
    };

    let java = emit(&request(Target::Java), "p");
    assert!(java.contains("    public Point() {\n    }"), "got:\n{java}");
    assert!(
        java.contains("    public Point(Point other) {\n        this.x = other.x;\n    }"),
        "got:\n{java}"
    );

    let csharp = emit(&request(Target::CSharp), "p");
    assert!(
        csharp.contains("    public Point(Point other)\n    {\n        this.x = other.x;\n    }"),
        "got:\n{csharp}"
    );
    assert_eq!(csharp.matches("public Point()").count(), 1, "got:\n{csharp}");
}

#[test]
fn missing_memory_skeleton_is_reported() {
    let skeletons = Skeletons {
        memory: None,
        ..Skeletons::bundled(Target::Cpp)
    };

    let err = TargetEmitter::new(Target::Cpp, &skeletons).unwrap_err();
    assert!(matches!(err, BuildError::MissingSkeleton { target: Target::Cpp }));
}
