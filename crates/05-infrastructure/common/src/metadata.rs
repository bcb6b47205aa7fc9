//! 元数据定义
//!
//! 提供类型描述符模型：构造器、字段、方法、参数以及附加在它们之上的标记。
//! 解析器只依赖这里的抽象描述，不接触具体的反射机制。

use crate::errors::{ResolutionError, ResolutionResult};
use crate::lifecycle::InitInvocation;
use serde::{Deserialize, Serialize};

/// 类型短名推导时会被剥离的包装类型
const WRAPPER_TYPES: &[&str] = &["Arc", "Rc", "Box", "Option"];

/// 标记
///
/// 可附加到类型、构造器、字段、方法或单个参数上的声明式元数据。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Marker {
    /// 注入标记，值为原始引用声明（可能以逗号分隔）
    Inject {
        /// 引用声明，`None` 表示使用默认引用
        #[serde(default)]
        value: Option<String>,
    },
    /// 初始化方法标记
    InitMethod {
        /// 调用顺序，缺省为 [`DEFAULT_ORDER`](crate::DEFAULT_ORDER)
        #[serde(default)]
        order: Option<i32>,
        /// 调用时机
        #[serde(default)]
        invocation: InitInvocation,
    },
    /// 销毁方法标记
    DestroyMethod {
        /// 调用顺序，缺省为 [`DEFAULT_ORDER`](crate::DEFAULT_ORDER)
        #[serde(default)]
        order: Option<i32>,
    },
    /// 提供者标记，成员产出另一个具名 bean
    Provider {
        /// 提供的 bean 名称，缺省取成员名称
        #[serde(default)]
        name: Option<String>,
    },
}

impl Marker {
    /// 无值注入标记
    pub fn inject() -> Self {
        Self::Inject { value: None }
    }

    /// 带引用声明的注入标记
    pub fn inject_value(value: impl Into<String>) -> Self {
        Self::Inject {
            value: Some(value.into()),
        }
    }

    /// 初始化方法标记
    pub fn init_method(order: Option<i32>, invocation: InitInvocation) -> Self {
        Self::InitMethod { order, invocation }
    }

    /// 销毁方法标记
    pub fn destroy_method(order: Option<i32>) -> Self {
        Self::DestroyMethod { order }
    }

    /// 提供者标记
    pub fn provider(name: Option<String>) -> Self {
        Self::Provider { name }
    }
}

/// 携带标记的元素
///
/// 查询函数对"标记存在但无值"返回 `Some("")`，对"标记不存在"返回 `None`。
pub trait Marked {
    /// 附加的全部标记
    fn markers(&self) -> &[Marker];

    /// 注入标记的原始值
    fn inject_value(&self) -> Option<&str> {
        self.markers().iter().find_map(|marker| match marker {
            Marker::Inject { value } => Some(value.as_deref().unwrap_or("")),
            _ => None,
        })
    }

    /// 是否带有注入标记
    fn is_injected(&self) -> bool {
        self.inject_value().is_some()
    }

    /// 初始化标记的顺序和调用时机
    fn init_marker(&self) -> Option<(Option<i32>, InitInvocation)> {
        self.markers().iter().find_map(|marker| match marker {
            Marker::InitMethod { order, invocation } => Some((*order, *invocation)),
            _ => None,
        })
    }

    /// 销毁标记的顺序
    fn destroy_marker(&self) -> Option<Option<i32>> {
        self.markers().iter().find_map(|marker| match marker {
            Marker::DestroyMethod { order } => Some(*order),
            _ => None,
        })
    }

    /// 提供者标记声明的名称
    fn provider_name(&self) -> Option<&str> {
        self.markers().iter().find_map(|marker| match marker {
            Marker::Provider { name } => Some(name.as_deref().unwrap_or("")),
            _ => None,
        })
    }
}

/// 参数描述符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// 参数名称
    pub name: String,
    /// 声明类型
    pub type_name: String,
    /// 参数标记
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl ParameterDescriptor {
    /// 创建新的参数描述符
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            markers: Vec::new(),
        }
    }

    /// 添加标记
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }
}

/// 构造器描述符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDescriptor {
    /// 构造器名称，如 `new`
    pub name: String,
    /// 按声明顺序排列的参数
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// 构造器标记
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl ConstructorDescriptor {
    /// 创建新的构造器描述符
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// 添加参数
    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// 添加标记
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// 参数个数
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// 是否为无参构造器
    pub fn is_default(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// 字段种类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// 单值字段
    Single,
    /// 多值字段（集合或数组），注入所有匹配元素类型的 bean
    Collection { element_type: String },
}

impl Default for FieldKind {
    fn default() -> Self {
        Self::Single
    }
}

/// 字段描述符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// 字段名称
    pub name: String,
    /// 声明类型
    pub type_name: String,
    /// 字段种类
    #[serde(default)]
    pub kind: FieldKind,
    /// 字段标记
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl FieldDescriptor {
    /// 创建单值字段描述符
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind: FieldKind::Single,
            markers: Vec::new(),
        }
    }

    /// 创建集合字段描述符
    pub fn collection(
        name: impl Into<String>,
        type_name: impl Into<String>,
        element_type: impl Into<String>,
    ) -> Self {
        Self {
            kind: FieldKind::Collection {
                element_type: element_type.into(),
            },
            ..Self::new(name, type_name)
        }
    }

    /// 添加标记
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// 集合元素类型，单值字段返回 `None`
    pub fn element_type(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Collection { element_type } => Some(element_type),
            FieldKind::Single => None,
        }
    }

    /// 是否为集合字段
    pub fn is_collection(&self) -> bool {
        self.element_type().is_some()
    }
}

/// 方法描述符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// 方法名称
    pub name: String,
    /// 按声明顺序排列的参数
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// 是否为关联函数（无 `self` 接收者）
    #[serde(default)]
    pub is_static: bool,
    /// 方法标记
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl MethodDescriptor {
    /// 创建新的方法描述符
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            is_static: false,
            markers: Vec::new(),
        }
    }

    /// 添加参数
    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// 添加标记
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// 标记为关联函数
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// 参数个数
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// 类型描述符
///
/// 一个类型的完整反射形状。注册到内省器之后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// 完整类型路径
    pub name: String,
    /// 构造器，按声明顺序
    #[serde(default)]
    pub constructors: Vec<ConstructorDescriptor>,
    /// 字段，按声明顺序
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// 方法，按声明顺序
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    /// 类型级标记
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl TypeDescriptor {
    /// 创建空的类型描述符
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructors: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// 创建类型描述符构建器
    pub fn builder(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            descriptor: Self::new(name),
        }
    }

    /// 获取简短的类型名称（不包含模块路径和泛型参数）
    pub fn short_name(&self) -> &str {
        let base = self.name.split('<').next().unwrap_or(&self.name);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// 按名称查找字段
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// 按名称查找方法
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|method| method.name == name)
    }

    /// 按名称查找构造器
    pub fn constructor(&self, name: &str) -> Option<&ConstructorDescriptor> {
        self.constructors.iter().find(|ctor| ctor.name == name)
    }

    /// 应用一条外部标记记录
    pub fn apply_record(&mut self, record: MarkerRecord) -> ResolutionResult<()> {
        let MarkerRecord { target, marker } = record;
        let markers = self.markers_of(&target)?;
        markers.push(marker);
        Ok(())
    }

    /// 按顺序应用多条外部标记记录，任意一条失败时整体失败且描述符保持不变
    pub fn apply_records<I>(&mut self, records: I) -> ResolutionResult<()>
    where
        I: IntoIterator<Item = MarkerRecord>,
    {
        let mut patched = self.clone();
        for record in records {
            patched.apply_record(record)?;
        }
        *self = patched;
        Ok(())
    }

    fn markers_of(&mut self, target: &MarkerTarget) -> ResolutionResult<&mut Vec<Marker>> {
        let type_name = self.name.clone();
        let missing = |member: String| ResolutionError::unknown_member(type_name.clone(), member);

        match target {
            MarkerTarget::Type => Ok(&mut self.markers),
            MarkerTarget::Constructor { name } => self
                .constructors
                .iter_mut()
                .find(|ctor| &ctor.name == name)
                .map(|ctor| &mut ctor.markers)
                .ok_or_else(|| missing(name.clone())),
            MarkerTarget::Field { name } => self
                .fields
                .iter_mut()
                .find(|field| &field.name == name)
                .map(|field| &mut field.markers)
                .ok_or_else(|| missing(name.clone())),
            MarkerTarget::Method { name } => self
                .methods
                .iter_mut()
                .find(|method| &method.name == name)
                .map(|method| &mut method.markers)
                .ok_or_else(|| missing(name.clone())),
            MarkerTarget::Parameter { member, index } => {
                let parameters = if let Some(ctor) =
                    self.constructors.iter_mut().find(|ctor| &ctor.name == member)
                {
                    &mut ctor.parameters
                } else if let Some(method) =
                    self.methods.iter_mut().find(|method| &method.name == member)
                {
                    &mut method.parameters
                } else {
                    return Err(missing(member.clone()));
                };

                parameters
                    .get_mut(*index)
                    .map(|parameter| &mut parameter.markers)
                    .ok_or_else(|| missing(format!("{}[{}]", member, index)))
            }
        }
    }
}

/// 类型描述符构建器
#[derive(Debug, Clone)]
pub struct TypeDescriptorBuilder {
    descriptor: TypeDescriptor,
}

impl TypeDescriptorBuilder {
    /// 添加构造器
    pub fn constructor(mut self, constructor: ConstructorDescriptor) -> Self {
        self.descriptor.constructors.push(constructor);
        self
    }

    /// 添加字段
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.descriptor.fields.push(field);
        self
    }

    /// 添加方法
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.descriptor.methods.push(method);
        self
    }

    /// 添加类型级标记
    pub fn marker(mut self, marker: Marker) -> Self {
        self.descriptor.markers.push(marker);
        self
    }

    /// 构建类型描述符
    pub fn build(self) -> TypeDescriptor {
        self.descriptor
    }
}

/// 标记记录的目标
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerTarget {
    /// 类型本身
    Type,
    /// 指定名称的构造器
    Constructor {
        /// 构造器名称
        name: String,
    },
    /// 指定名称的字段
    Field {
        /// 字段名称
        name: String,
    },
    /// 指定名称的方法
    Method {
        /// 方法名称
        name: String,
    },
    /// 构造器或方法的第 `index` 个参数（先按构造器名称查找）
    Parameter {
        /// 构造器或方法名称
        member: String,
        /// 参数位置，从 0 开始
        index: usize,
    },
}

/// 外部标记记录
///
/// 用于在不修改类型源码的情况下（例如通过配置文件）为成员附加标记。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRecord {
    /// 标记附加的目标
    pub target: MarkerTarget,
    /// 附加的标记
    pub marker: Marker,
}

impl MarkerRecord {
    /// 创建新的标记记录
    pub fn new(target: MarkerTarget, marker: Marker) -> Self {
        Self { target, marker }
    }

    /// 从 JSON 数组解析标记记录
    pub fn parse_json(json: &str) -> Result<Vec<Self>, crate::errors::ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

macro_rules! impl_marked {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Marked for $ty {
                fn markers(&self) -> &[Marker] {
                    &self.markers
                }
            }
        )*
    };
}

impl_marked!(
    TypeDescriptor,
    ConstructorDescriptor,
    ParameterDescriptor,
    FieldDescriptor,
    MethodDescriptor,
);

/// 可内省类型
///
/// 由 `#[derive(Introspect)]` 生成，或手工通过 [`TypeDescriptor::builder`] 实现。
pub trait Introspect: 'static {
    /// 生成类型描述符
    fn describe() -> TypeDescriptor;

    /// 类型在内省器中的注册名称
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// 从声明类型推导简短名称
///
/// 剥离引用、`dyn`、模块路径以及 `Arc`/`Rc`/`Box`/`Option` 包装，首字母小写。
/// 例如 `std::sync::Arc<app::UserRepository>` 得到 `userRepository`。
pub fn short_type_name(type_name: &str) -> String {
    let mut current = type_name.trim();
    loop {
        current = current.trim_start_matches('&').trim_start();
        if let Some(rest) = current.strip_prefix("mut ") {
            current = rest.trim_start();
        }
        if let Some(rest) = current.strip_prefix("dyn ") {
            current = rest.trim_start();
        }

        let (head, inner) = match current.find('<') {
            Some(index) if current.ends_with('>') => {
                (&current[..index], Some(&current[index + 1..current.len() - 1]))
            }
            _ => (current, None),
        };
        let last = head.rsplit("::").next().unwrap_or(head).trim();

        match inner {
            Some(inner) if WRAPPER_TYPES.contains(&last) => current = inner.trim(),
            _ => return lower_first(last),
        }
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
