//! 数据依赖与数据变更声明

use std::collections::BTreeSet;

use super::view_model::ViewModelKind;

/// 组件的数据依赖声明
///
/// 每个组件拥有一份，记录其渲染时读取的视图模型（有序）。
/// 声明时不做校验；声明与 Provider 实际返回的类型不符属于编程错误，
/// 在渲染时以标签检查失败的形式暴露
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataDependencies {
    kinds: Vec<ViewModelKind>,
}

impl DataDependencies {
    /// 声明依赖的视图模型
    pub fn on(kinds: &[ViewModelKind]) -> Self {
        Self {
            kinds: kinds.to_vec(),
        }
    }

    /// 按声明顺序遍历依赖
    pub fn kinds(&self) -> impl Iterator<Item = ViewModelKind> + '_ {
        self.kinds.iter().copied()
    }

    /// 依赖隐含的数据域集合（各视图模型声明的域的并集）
    pub fn domains(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.iter().flat_map(|k| k.domains().iter().copied())
    }

    /// 是否与给定的变更集相交
    pub fn intersects(&self, mutations: &DataMutations) -> bool {
        self.domains().any(|d| mutations.contains(d))
    }
}

/// 交互写入的数据域集合
///
/// 每次交互结束后新建一份，请求结束即丢弃。
/// 消费方只做成员测试，重复与顺序无关紧要
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataMutations {
    domains: BTreeSet<String>,
}

impl DataMutations {
    /// 空变更集：纯副作用交互，选择器将不选中任何组件
    pub fn none() -> Self {
        Self::default()
    }

    /// 由数据域名称构建变更集
    pub fn of<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }

    /// 是否包含某个数据域
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// 按名称遍历写入的数据域
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }
}
